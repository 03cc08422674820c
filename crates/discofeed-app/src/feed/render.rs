//! Post rendering
//!
//! Produces HTML fragments intended for direct insertion into a document.
//! Body text goes through the engine formatter (escaped); embed markup is
//! inserted as-is because it comes from the engine's fixed templates, never
//! from remote markup.

use chrono::{DateTime, Utc};
use discofeed::audio::LinkMatcher;
use discofeed::feed::formatter;

use crate::data::Settings;
use crate::providers::Post;

/// Render one post as an `<article>` fragment
///
/// The first detected audio link is rendered as an inline player; every
/// matched raw URL is stripped from the displayed body text.
pub fn render_post(post: &Post, matcher: &LinkMatcher, settings: &Settings) -> String {
    let matches = matcher.scan(&post.body);
    let body_html = formatter::format_body(&post.body, &matches);
    let embed = matches
        .first()
        .map(|m| m.embed_markup.as_str())
        .unwrap_or("");

    let mut out = String::new();
    out.push_str("<article class=\"post\">\n<header>\n");
    if let Some(avatar) = &post.avatar_url {
        out.push_str(&format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"\">\n",
            formatter::escape_html(avatar)
        ));
    }
    out.push_str(&format!(
        "<span class=\"author\">{}</span>\n",
        formatter::escape_html(&post.author)
    ));
    out.push_str(&format!(
        "<time datetime=\"{}\">{}</time>\n",
        post.created_at.to_rfc3339(),
        relative_time(post.created_at, Utc::now())
    ));
    out.push_str("</header>\n");

    if !post.title.is_empty() {
        out.push_str(&format!(
            "<h2>{}</h2>\n",
            formatter::escape_html(&post.title)
        ));
    }
    if !body_html.is_empty() {
        out.push_str(&format!("<p class=\"body\">{}</p>\n", body_html));
    }
    if !embed.is_empty() {
        out.push_str(&format!("<div class=\"player\">{}</div>\n", embed));
    }

    out.push_str("<footer>\n");
    if settings.show_comment_counts {
        out.push_str(&format!(
            "<span class=\"comments\">{} comments</span>\n",
            post.comment_count
        ));
    }
    if settings.show_reaction_counts {
        out.push_str(&format!(
            "<span class=\"reactions\">{} reactions</span>\n",
            post.reaction_count
        ));
    }
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">open</a>\n",
        formatter::escape_html(&post.url)
    ));
    out.push_str("</footer>\n</article>");
    out
}

/// Render a list of posts as joined `<article>` fragments
pub fn render_feed(posts: &[Post], matcher: &LinkMatcher, settings: &Settings) -> String {
    posts
        .iter()
        .map(|post| render_post(post, matcher, settings))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a minimal standalone HTML page around the feed (CLI output)
///
/// When auto-refresh is enabled in the settings the page carries a
/// `<meta http-equiv="refresh">` tag at the configured interval, so a
/// browser pointed at the written file picks up rewrites on its own.
pub fn render_page(
    posts: &[Post],
    matcher: &LinkMatcher,
    settings: &Settings,
    title: &str,
) -> String {
    let refresh = if settings.auto_refresh {
        format!(
            "<meta http-equiv=\"refresh\" content=\"{}\">\n",
            settings.refresh_interval_secs.max(1)
        )
    } else {
        String::new()
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {refresh}<title>{title}</title>\n</head>\n<body>\n<main class=\"feed\">\n{feed}\n</main>\n</body>\n</html>",
        title = formatter::escape_html(title),
        feed = render_feed(posts, matcher, settings),
    )
}

/// Short relative timestamp for post headers ("5m ago" style)
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else if secs < 30 * 86_400 {
        format!("{}d ago", secs / 86_400)
    } else {
        then.format("%b %e, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::types::testutil::sample_post;
    use chrono::TimeZone;

    fn matcher() -> LinkMatcher {
        LinkMatcher::new()
    }

    #[test]
    fn test_render_post_embeds_first_match() {
        let post = sample_post("hear https://youtu.be/dQw4w9WgXcQ now");
        let html = render_post(&post, &matcher(), &Settings::default());
        assert!(html.contains("youtube.com/embed/dQw4w9WgXcQ"));
        assert!(html.contains("<div class=\"player\">"));
    }

    #[test]
    fn test_render_post_strips_matched_urls_from_body() {
        let post = sample_post(
            "two https://youtu.be/dQw4w9WgXcQ links https://open.spotify.com/track/abc123 here",
        );
        let html = render_post(&post, &matcher(), &Settings::default());
        // Only the first match is embedded...
        assert_eq!(html.matches("<iframe").count(), 1);
        // ...but neither raw URL survives in the body text
        let body = html.split("<p class=\"body\">").nth(1).unwrap();
        let body = body.split("</p>").next().unwrap();
        assert!(!body.contains("youtu.be/dQw4w9WgXcQ"));
        assert!(!body.contains("open.spotify.com/track/abc123"));
    }

    #[test]
    fn test_render_post_escapes_author_and_title() {
        let mut post = sample_post("body");
        post.author = "<script>alert(1)</script>".to_string();
        post.title = "a & b".to_string();
        let html = render_post(&post, &matcher(), &Settings::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_render_post_without_links_has_no_player() {
        let post = sample_post("just words");
        let html = render_post(&post, &matcher(), &Settings::default());
        assert!(!html.contains("class=\"player\""));
        assert!(html.contains("just words"));
    }

    #[test]
    fn test_render_post_respects_count_toggles() {
        let post = sample_post("body");
        let mut settings = Settings::default();
        settings.show_comment_counts = false;
        settings.show_reaction_counts = false;
        let html = render_post(&post, &matcher(), &settings);
        assert!(!html.contains("comments"));
        assert!(!html.contains("reactions"));
        // The discussion link stays
        assert!(html.contains("discussions/42"));
    }

    #[test]
    fn test_render_post_honors_platform_restriction() {
        let post = sample_post("https://youtu.be/dQw4w9WgXcQ");
        let restricted = LinkMatcher::with_platforms(&[discofeed::audio::Platform::Spotify]);
        let html = render_post(&post, &restricted, &Settings::default());
        assert!(!html.contains("<iframe"));
        // Unmatched link stays in the body text
        assert!(html.contains("youtu.be"));
    }

    #[test]
    fn test_render_feed_joins_posts() {
        let posts = vec![sample_post("one"), sample_post("two")];
        let html = render_feed(&posts, &matcher(), &Settings::default());
        assert_eq!(html.matches("<article").count(), 2);
    }

    #[test]
    fn test_render_page_is_standalone_document() {
        let html = render_page(
            &[sample_post("hi")],
            &matcher(),
            &Settings::default(),
            "owner/repo",
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>owner/repo</title>"));
        assert!(html.contains("<article"));
    }

    #[test]
    fn test_render_page_auto_refresh_meta() {
        let mut settings = Settings::default();
        settings.auto_refresh = true;
        settings.refresh_interval_secs = 90;
        let html = render_page(&[], &matcher(), &settings, "t");
        assert!(html.contains("<meta http-equiv=\"refresh\" content=\"90\">"));

        settings.auto_refresh = false;
        let html = render_page(&[], &matcher(), &settings, "t");
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        let at = |secs: i64| now - chrono::Duration::seconds(secs);
        assert_eq!(relative_time(at(10), now), "just now");
        assert_eq!(relative_time(at(300), now), "5m ago");
        assert_eq!(relative_time(at(7200), now), "2h ago");
        assert_eq!(relative_time(at(3 * 86_400), now), "3d ago");
        assert!(relative_time(at(90 * 86_400), now).contains("2026"));
    }

    #[test]
    fn test_relative_time_future_clamped() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        let future = now + chrono::Duration::seconds(120);
        assert_eq!(relative_time(future, now), "just now");
    }
}
