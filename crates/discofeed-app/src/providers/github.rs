//! GitHub Discussions feed provider
//!
//! Reads discussion threads from a repository over the GitHub GraphQL API
//! and maps them to feed posts. A single query type, parameterized by owner,
//! repository, optional category ID, and a result-count limit.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::config::providers::GITHUB_GRAPHQL_ENDPOINT;
use crate::data::Settings;
use crate::error::{AppError, Result};
use crate::network::HttpClient;

use super::traits::FeedProvider;
use super::types::Post;

/// The one query this provider issues. Newest discussions first; a null
/// categoryId returns discussions from every category.
const DISCUSSIONS_QUERY: &str = r#"
query($owner: String!, $name: String!, $categoryId: ID, $limit: Int!) {
  repository(owner: $owner, name: $name) {
    discussions(first: $limit, categoryId: $categoryId, orderBy: {field: CREATED_AT, direction: DESC}) {
      nodes {
        title
        body
        url
        createdAt
        author { login avatarUrl }
        comments { totalCount }
        reactions { totalCount }
      }
    }
  }
}"#;

// =============================================================================
// GraphQL response envelope (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
struct Repository {
    discussions: DiscussionConnection,
}

#[derive(Debug, Deserialize)]
struct DiscussionConnection {
    #[serde(default)]
    nodes: Vec<Option<DiscussionNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiscussionNode {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    url: String,
    created_at: DateTime<Utc>,
    author: Option<Author>,
    comments: CountField,
    reactions: CountField,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Author {
    login: String,
    #[serde(default)]
    avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountField {
    total_count: u32,
}

impl From<DiscussionNode> for Post {
    fn from(node: DiscussionNode) -> Self {
        // Deleted accounts come back as a null author
        let (author, avatar_url) = match node.author {
            Some(a) => (a.login, a.avatar_url),
            None => ("ghost".to_string(), None),
        };
        Post {
            author,
            avatar_url,
            title: node.title,
            body: node.body,
            created_at: node.created_at,
            url: node.url,
            comment_count: node.comments.total_count,
            reaction_count: node.reactions.total_count,
        }
    }
}

// =============================================================================
// GithubDiscussionsProvider
// =============================================================================

/// GitHub Discussions provider
///
/// Treats the discussions of one repository (optionally scoped to a single
/// category) as a social feed.
pub struct GithubDiscussionsProvider {
    client: HttpClient,
    endpoint: String,
    owner: String,
    repo: String,
    category_id: Option<String>,
    token: Option<String>,
}

impl GithubDiscussionsProvider {
    /// Create a provider from application settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            endpoint: endpoint_url(settings.endpoint_prefix.as_deref()),
            owner: settings.owner.clone(),
            repo: settings.repo.clone(),
            category_id: settings.category_id.clone(),
            token: settings.token.clone(),
        })
    }

    /// Decode a GraphQL response body into posts
    ///
    /// The first reported application-level error message is surfaced and
    /// treated like a transport failure by callers.
    fn decode(&self, resp: GraphQlResponse) -> Result<Vec<Post>> {
        if let Some(err) = resp.errors.first() {
            return Err(AppError::Api(err.message.clone()));
        }
        let repository = resp.data.and_then(|d| d.repository).ok_or_else(|| {
            AppError::Api(format!("repository {}/{} not found", self.owner, self.repo))
        })?;
        Ok(repository
            .discussions
            .nodes
            .into_iter()
            .flatten()
            .map(Post::from)
            .collect())
    }
}

/// Endpoint with the optional forwarding prefix prepended
///
/// The prefix routes requests through an intermediary (e.g. a CORS proxy);
/// it is prepended verbatim to the full GraphQL URL.
fn endpoint_url(prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{GITHUB_GRAPHQL_ENDPOINT}"),
        None => GITHUB_GRAPHQL_ENDPOINT.to_string(),
    }
}

impl FeedProvider for GithubDiscussionsProvider {
    fn name(&self) -> &'static str {
        "GitHub Discussions"
    }

    fn id(&self) -> &'static str {
        "github-discussions"
    }

    fn fetch(&self, limit: u32) -> Result<Vec<Post>> {
        let body = json!({
            "query": DISCUSSIONS_QUERY,
            "variables": {
                "owner": self.owner,
                "name": self.repo,
                "categoryId": self.category_id,
                "limit": limit,
            },
        });
        log::debug!(
            "fetching {} discussions from {}/{}",
            limit,
            self.owner,
            self.repo
        );
        let resp: GraphQlResponse =
            self.client
                .post_json(&self.endpoint, self.token.as_deref(), &body)?;
        self.decode(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_for(owner: &str, repo: &str) -> GithubDiscussionsProvider {
        let settings = Settings {
            owner: owner.to_string(),
            repo: repo.to_string(),
            ..Settings::default()
        };
        GithubDiscussionsProvider::from_settings(&settings).unwrap()
    }

    fn parse(json: &str) -> GraphQlResponse {
        serde_json::from_str(json).unwrap()
    }

    const FULL_RESPONSE: &str = r#"{
        "data": {
            "repository": {
                "discussions": {
                    "nodes": [
                        {
                            "title": "Friday drop",
                            "body": "https://soundcloud.com/a/b",
                            "url": "https://github.com/o/r/discussions/1",
                            "createdAt": "2026-08-20T12:00:00Z",
                            "author": {"login": "octocat", "avatarUrl": "https://img/o.png"},
                            "comments": {"totalCount": 2},
                            "reactions": {"totalCount": 5}
                        },
                        {
                            "title": "",
                            "body": "quiet day",
                            "url": "https://github.com/o/r/discussions/2",
                            "createdAt": "2026-08-19T09:30:00Z",
                            "author": null,
                            "comments": {"totalCount": 0},
                            "reactions": {"totalCount": 0}
                        }
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn test_decode_nodes() {
        let posts = provider_for("o", "r").decode(parse(FULL_RESPONSE)).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].author, "octocat");
        assert_eq!(posts[0].avatar_url.as_deref(), Some("https://img/o.png"));
        assert_eq!(posts[0].comment_count, 2);
        assert_eq!(posts[0].reaction_count, 5);
        assert_eq!(posts[0].created_at.to_rfc3339(), "2026-08-20T12:00:00+00:00");
    }

    #[test]
    fn test_decode_null_author_becomes_ghost() {
        let posts = provider_for("o", "r").decode(parse(FULL_RESPONSE)).unwrap();
        assert_eq!(posts[1].author, "ghost");
        assert_eq!(posts[1].avatar_url, None);
    }

    #[test]
    fn test_decode_empty_node_list() {
        let json = r#"{"data": {"repository": {"discussions": {"nodes": []}}}}"#;
        let posts = provider_for("o", "r").decode(parse(json)).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_decode_null_nodes_skipped() {
        let json = r#"{"data": {"repository": {"discussions": {"nodes": [null]}}}}"#;
        let posts = provider_for("o", "r").decode(parse(json)).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_decode_first_error_message_wins() {
        let json = r#"{
            "data": null,
            "errors": [
                {"message": "Bad credentials"},
                {"message": "secondary"}
            ]
        }"#;
        let err = provider_for("o", "r").decode(parse(json)).unwrap_err();
        match err {
            AppError::Api(msg) => assert_eq!(msg, "Bad credentials"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_missing_repository() {
        let json = r#"{"data": {"repository": null}}"#;
        let err = provider_for("owner", "gone").decode(parse(json)).unwrap_err();
        assert!(err.to_string().contains("owner/gone"));
    }

    #[test]
    fn test_endpoint_without_prefix() {
        assert_eq!(endpoint_url(None), "https://api.github.com/graphql");
    }

    #[test]
    fn test_endpoint_with_forwarding_prefix() {
        assert_eq!(
            endpoint_url(Some("https://proxy.example.com/")),
            "https://proxy.example.com/https://api.github.com/graphql"
        );
    }

    #[test]
    fn test_provider_identity() {
        let provider = provider_for("o", "r");
        assert_eq!(provider.id(), "github-discussions");
        assert_eq!(provider.name(), "GitHub Discussions");
    }

    #[test]
    fn test_query_requests_expected_fields() {
        for field in ["title", "body", "url", "createdAt", "author", "comments", "reactions"] {
            assert!(DISCUSSIONS_QUERY.contains(field), "{field}");
        }
        assert!(DISCUSSIONS_QUERY.contains("direction: DESC"));
    }

    // ---- Integration tests (require network, marked #[ignore]) ----

    #[test]
    #[ignore]
    fn test_integration_fetch_public_repo() {
        let provider = provider_for("vercel", "next.js");
        let posts = provider.fetch(5).unwrap();
        assert!(posts.len() <= 5);
    }
}
