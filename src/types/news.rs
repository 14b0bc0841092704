//! News provider wire types and the produced headline shapes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Upstream response
// ---------------------------------------------------------------------------

/// Top-headlines response as NewsAPI.org serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    pub status: String,
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

/// One upstream article; most fields are nullable on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    pub source: NewsApiSource,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    pub published_at: String,
}

/// Publisher attribution for an upstream article.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Produced shape
// ---------------------------------------------------------------------------

/// One reshaped article in the headlines response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    /// Upstream nulls are replaced with a fixed fallback text.
    pub description: String,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: String,
    /// Publisher name (the upstream nests it under `source.name`).
    pub source: String,
}

impl From<NewsApiArticle> for Article {
    fn from(article: NewsApiArticle) -> Self {
        Self {
            title: article.title,
            description: article
                .description
                .unwrap_or_else(|| "No description available".to_owned()),
            url: article.url,
            url_to_image: article.url_to_image,
            published_at: article.published_at,
            source: article.source.name,
        }
    }
}

/// Response shape of the business headlines operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Headlines {
    pub success: bool,
    pub articles: Vec<Article>,
    pub total_results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_article_reshapes_with_description_fallback() {
        let upstream: NewsApiArticle = serde_json::from_str(
            r#"{
                "source": { "id": null, "name": "Reuters" },
                "author": "Desk",
                "title": "Markets rally",
                "description": null,
                "url": "https://example.com/markets",
                "urlToImage": null,
                "publishedAt": "2025-11-02T09:00:00Z",
                "content": "…"
            }"#,
        )
        .expect("upstream article should deserialize");

        let article = Article::from(upstream);
        assert_eq!(article.source, "Reuters");
        assert_eq!(article.description, "No description available");
        assert_eq!(article.published_at, "2025-11-02T09:00:00Z");
    }

    #[test]
    fn produced_article_uses_the_contract_field_names() {
        let article = Article {
            title: "t".into(),
            description: "d".into(),
            url: "u".into(),
            url_to_image: Some("img".into()),
            published_at: "p".into(),
            source: "s".into(),
        };
        let json = serde_json::to_value(article).expect("article serializes");
        assert_eq!(json["urlToImage"], "img");
        assert_eq!(json["publishedAt"], "p");
    }
}
