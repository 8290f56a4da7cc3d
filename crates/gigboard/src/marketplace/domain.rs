use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog postings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PostingId(pub u64);

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Remote,
    Onsite,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Удалёнка",
            Self::Onsite => "Живая подработка",
        }
    }
}

/// Category selector used by search: `All` matches every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Remote,
    Onsite,
}

impl CategoryFilter {
    pub const fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Remote => matches!(category, Category::Remote),
            Self::Onsite => matches!(category, Category::Onsite),
        }
    }
}

/// Which side of the marketplace a posting comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingKind {
    Employer,
    Worker,
}

impl PostingKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employer => "Ищу работника",
            Self::Worker => "Ищу работу",
        }
    }

    /// Author placeholder stamped onto submissions until accounts exist.
    pub(crate) const fn default_author(self) -> &'static str {
        match self {
            Self::Employer => "Новый заказчик",
            Self::Worker => "Новый работник",
        }
    }

    /// Employer postings are on-site work orders; worker postings advertise
    /// remote availability.
    pub(crate) const fn category(self) -> Category {
        match self {
            Self::Employer => Category::Onsite,
            Self::Worker => Category::Remote,
        }
    }
}

/// Mode-specific fields captured from the submission forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "form")]
pub enum PostingDetails {
    Employer {
        city: String,
        address: String,
        date: NaiveDate,
        duration: String,
        workers_needed: u32,
        hourly_rate: u32,
    },
    Worker {
        city: String,
        available_time: String,
        duration: String,
        team_size: u32,
        is_brigade: bool,
        hourly_rate: u32,
    },
}

/// A posting as stored by the catalog. Favorite status is intentionally not
/// stored here; it is derived from the favorites set when views are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: PostingId,
    pub kind: PostingKind,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: String,
    pub rating: f32,
    pub reviews: u32,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PostingDetails>,
}

impl JobPosting {
    /// Case-insensitive substring match on title or description. The needle
    /// must already be lowercased; an empty needle matches everything.
    pub(crate) fn matches_query(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }

    pub fn view(self, is_favorite: bool) -> PostingView {
        PostingView {
            id: self.id,
            kind: self.kind,
            category_label: self.category.label(),
            title: self.title,
            description: self.description,
            category: self.category,
            price: self.price,
            rating: self.rating,
            reviews: self.reviews,
            author: self.author,
            is_favorite,
            details: self.details,
        }
    }
}

/// A posting without an id: the shape produced by the built-in seed and the
/// CSV importer. The catalog assigns ids when records are loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub kind: PostingKind,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: String,
    pub rating: f32,
    pub reviews: u32,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PostingDetails>,
}

impl CatalogRecord {
    pub fn into_posting(self, id: PostingId) -> JobPosting {
        JobPosting {
            id,
            kind: self.kind,
            title: self.title,
            description: self.description,
            category: self.category,
            price: self.price,
            rating: self.rating,
            reviews: self.reviews,
            author: self.author,
            details: self.details,
        }
    }
}

/// Normalized output of submission validation. The catalog merges the
/// remaining defaults (fresh id, zero rating, zero reviews) on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPosting {
    pub kind: PostingKind,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: String,
    pub author: String,
    pub details: PostingDetails,
}

impl NewPosting {
    pub fn into_posting(self, id: PostingId) -> JobPosting {
        JobPosting {
            id,
            kind: self.kind,
            title: self.title,
            description: self.description,
            category: self.category,
            price: self.price,
            rating: 0.0,
            reviews: 0,
            author: self.author,
            details: Some(self.details),
        }
    }
}

/// Catalog view handed to the UI/API, with favorite status derived from the
/// favorites set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostingView {
    pub id: PostingId,
    pub kind: PostingKind,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub category_label: &'static str,
    pub price: String,
    pub rating: f32,
    pub reviews: u32,
    pub author: String,
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PostingDetails>,
}
