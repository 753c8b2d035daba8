use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// Raw query-string parameters as the HTTP layer receives them. Every
/// field is optional and numeric fields arrive as strings so malformed
/// input can be defaulted instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    #[serde(alias = "limit", alias = "pageSize")]
    pub page_size: Option<String>,
    #[serde(alias = "query")]
    pub search: Option<String>,
    pub tag: Option<String>,
    pub published: Option<String>,
    #[serde(alias = "orderBy")]
    pub order_by: Option<String>,
    pub order: Option<String>,
}

/// Sort fields content listings may order by. Anything else falls back
/// to creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Published,
    Featured,
}

impl SortField {
    pub fn parse_or_default(s: Option<&str>) -> Self {
        match s {
            Some("created_at") | Some("createdAt") => Self::CreatedAt,
            Some("updated_at") | Some("updatedAt") => Self::UpdatedAt,
            Some("title") => Self::Title,
            Some("published") => Self::Published,
            Some("featured") => Self::Featured,
            _ => Self::CreatedAt,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
            Self::Published => "published",
            Self::Featured => "featured",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse_or_default(s: Option<&str>) -> Self {
        match s {
            Some(v) if v.eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A fully-parsed, clamped listing request. `page` is 1-based and at
/// least 1; `page_size` is within `[1, max]`.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub page: usize,
    pub page_size: usize,
    pub search: Option<String>,
    pub tag: Option<String>,
    pub published: Option<bool>,
    pub order_by: SortField,
    pub order: SortOrder,
}

impl ListQuery {
    pub fn from_params(params: &ListParams, default_page_size: usize, max_page_size: usize) -> Self {
        let page = parse_number(params.page.as_deref()).unwrap_or(1).max(1);
        let page_size = parse_number(params.page_size.as_deref())
            .unwrap_or(default_page_size)
            .clamp(1, max_page_size);

        Self {
            page,
            page_size,
            search: non_empty(params.search.as_deref()),
            tag: non_empty(params.tag.as_deref()),
            published: match params.published.as_deref() {
                Some("true") => Some(true),
                Some("false") => Some(false),
                _ => None,
            },
            order_by: SortField::parse_or_default(params.order_by.as_deref()),
            order: SortOrder::parse_or_default(params.order.as_deref()),
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

fn parse_number(s: Option<&str>) -> Option<usize> {
    s.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}

/// Pagination envelope returned by every listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, query: &ListQuery) -> Self {
        let total = total.max(0);
        let total_pages = (total as usize).div_ceil(query.page_size);

        Self {
            items,
            total,
            total_pages,
            current_page: query.page,
            page_size: query.page_size,
            has_next_page: query.page < total_pages,
            has_prev_page: query.page > 1,
        }
    }
}

/// Accumulates WHERE clauses and their bind values for a filtered
/// count + fetch query pair.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clause<I>(&mut self, sql: &str, values: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.clauses.push(sql.to_string());
        self.params.extend(values);
    }

    /// Case-insensitive substring match across `columns`, OR-combined.
    pub fn search(&mut self, columns: &[&str], term: &str) {
        let pattern = contains_pattern(term);
        let sql = columns
            .iter()
            .map(|c| format!("lower({}) LIKE ? ESCAPE '\\'", c))
            .collect::<Vec<_>>()
            .join(" OR ");
        let values: Vec<Value> = columns
            .iter()
            .map(|_| Value::from(pattern.clone()))
            .collect();
        self.clause(&format!("({})", sql), values);
    }

    /// Case-insensitive containment against a JSON string-array column.
    /// NULL or empty arrays yield no rows from json_each, so they never
    /// match.
    pub fn tag(&mut self, column: &str, tag: &str) {
        self.clause(
            &format!(
                "EXISTS (SELECT 1 FROM json_each({}) WHERE lower(json_each.value) = lower(?))",
                column
            ),
            [Value::from(tag.to_string())],
        );
    }

    /// Renders ` WHERE a AND b`, or nothing when unfiltered.
    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub fn params(&self) -> Vec<Value> {
        self.params.clone()
    }
}

pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like_pattern(&term.to_lowercase()))
}
