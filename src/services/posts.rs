use crate::services::api::{ApiClient, ApiError};
use reqwest::Method;
use serde::Deserialize;

const POSTS_PATH: &str = "/api/post/getPosts";

/// A published post shown on the home carousel
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl Post {
    /// Plain-text excerpt of the body with markup stripped
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = strip_tags(&self.content);
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() <= max_chars {
            return collapsed;
        }
        let mut cut: String = collapsed.chars().take(max_chars.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}

fn strip_tags(html: &str) -> String {
    let mut output = String::with_capacity(html.len());
    let mut in_tag = false;
    for character in html.chars() {
        match character {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                output.push(' ');
            }
            _ if !in_tag => output.push(character),
            _ => {}
        }
    }
    output
}

#[derive(Debug, Deserialize)]
struct PostsResponse {
    #[serde(default)]
    posts: Vec<Post>,
}

/// Read-only access to published posts
#[derive(Debug, Clone)]
pub struct PostService {
    api: ApiClient,
}

impl PostService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let (status, body) = self
            .api
            .send(self.api.request(Method::GET, POSTS_PATH), "get posts")?;
        parse_posts(status, &body)
    }
}

fn parse_posts(status: u16, body: &str) -> Result<Vec<Post>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            message: body.trim().chars().take(120).collect(),
        });
    }
    let response: PostsResponse = serde_json::from_str(body)?;
    Ok(response.posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_posts() {
        let body = r#"{"posts":[
            {"_id":"p1","title":"Reporting potholes","content":"<p>Use the <b>map</b></p>","category":"guides"},
            {"_id":"p2","title":"Office hours"}
        ],"totalPosts":2}"#;
        let posts = parse_posts(200, body).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].category.as_deref(), Some("guides"));
        assert_eq!(posts[1].content, "");
    }

    #[test]
    fn test_parse_posts_error_status() {
        let error = parse_posts(500, "boom").unwrap_err();
        assert!(matches!(error, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn test_excerpt_strips_markup() {
        let post = Post {
            id: "p".to_string(),
            title: "t".to_string(),
            content: "<h1>Hello</h1><p>civic   world</p>".to_string(),
            category: None,
            slug: None,
        };
        assert_eq!(post.excerpt(100), "Hello civic world");
        assert_eq!(post.excerpt(8), "Hello...");
    }
}
