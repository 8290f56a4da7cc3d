use super::domain::{CatalogRecord, Category, PostingKind};

/// Built-in sample postings used when no CSV seed is supplied. All six are
/// employer work orders; ids are assigned by the catalog on load.
pub fn sample_records() -> Vec<CatalogRecord> {
    vec![
        record(
            "Разработка лендинга для стартапа",
            "Требуется создать современный одностраничный сайт с адаптивной вёрсткой",
            Category::Remote,
            "25 000 ₽",
            4.8,
            24,
            "Алексей М.",
        ),
        record(
            "Дизайн логотипа для кафе",
            "Нужен минималистичный логотип в современном стиле",
            Category::Remote,
            "8 000 ₽",
            4.9,
            156,
            "Мария К.",
        ),
        record(
            "Копирайтинг статей для блога",
            "Написание SEO-оптимизированных статей на технологическую тематику",
            Category::Remote,
            "3 000 ₽",
            4.7,
            89,
            "Дмитрий П.",
        ),
        record(
            "Настройка рекламы в Яндекс.Директ",
            "Требуется специалист для настройки и ведения рекламных кампаний",
            Category::Onsite,
            "15 000 ₽",
            4.6,
            42,
            "Елена В.",
        ),
        record(
            "Перевод технической документации",
            "Перевод с английского на русский, тематика IT",
            Category::Remote,
            "1 500 ₽",
            5.0,
            213,
            "Ирина С.",
        ),
        record(
            "Создание презентации для инвесторов",
            "Нужна качественная презентация проекта, до 20 слайдов",
            Category::Onsite,
            "12 000 ₽",
            4.8,
            67,
            "Сергей Н.",
        ),
    ]
}

fn record(
    title: &str,
    description: &str,
    category: Category,
    price: &str,
    rating: f32,
    reviews: u32,
    author: &str,
) -> CatalogRecord {
    CatalogRecord {
        kind: PostingKind::Employer,
        title: title.to_string(),
        description: description.to_string(),
        category,
        price: price.to_string(),
        rating,
        reviews,
        author: author.to_string(),
        details: None,
    }
}
