//! Output formatting utilities

use crate::application::ArticleStats;
use crate::domain::Article;

/// Format a list of articles for display
pub fn format_article_list(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No articles found".to_string();
    }

    let mut output = String::new();
    for article in articles {
        let marker = if article.published { "" } else { " (draft)" };
        output.push_str(&format!(
            "{}  {}  [{}] {}{}\n",
            article.date.format("%d-%m-%Y"),
            article.id,
            article.category,
            article.title,
            marker
        ));
    }
    output
}

/// Format a single article with its body
pub fn format_article(article: &Article) -> String {
    let status = if article.published {
        "published"
    } else {
        "draft"
    };
    format!(
        "{}\n{} • {} • {}\nid: {}\n\n{}\n\n{}\n",
        article.title,
        article.date.format("%d-%m-%Y"),
        article.category,
        status,
        article.id,
        article.excerpt,
        article.content
    )
}

pub fn format_stats(stats: &ArticleStats) -> String {
    format!(
        "articles = {}\npublished = {}\ncategories = {}\n",
        stats.total, stats.published, stats.categories
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn article(title: &str, published: bool) -> Article {
        Article {
            id: "id-1".to_string(),
            title: title.to_string(),
            category: "Design".to_string(),
            content: "<p>body</p>".to_string(),
            excerpt: "body".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            published,
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_article_list(&[]), "No articles found");
    }

    #[test]
    fn test_format_article_list() {
        let output = format_article_list(&[article("Colour", true)]);
        assert_eq!(output, "17-01-2025  id-1  [Design] Colour\n");
    }

    #[test]
    fn test_format_marks_drafts() {
        let output = format_article_list(&[article("Colour", false)]);
        assert!(output.ends_with("Colour (draft)\n"));
    }

    #[test]
    fn test_format_article_detail() {
        let output = format_article(&article("Colour", true));
        assert!(output.starts_with("Colour\n17-01-2025 • Design • published\n"));
        assert!(output.contains("id: id-1"));
        assert!(output.contains("<p>body</p>"));
    }

    #[test]
    fn test_format_stats() {
        let stats = ArticleStats {
            total: 3,
            published: 2,
            categories: 1,
        };
        assert_eq!(
            format_stats(&stats),
            "articles = 3\npublished = 2\ncategories = 1\n"
        );
    }
}
