//! iCalendar rendering, RFC 5545 subset: VCALENDAR/VEVENT with UID,
//! DTSTART and SUMMARY only.

use crate::domain::Post;

/// Namespace suffix keeping UIDs stable across exports, so calendar
/// clients deduplicate re-imported events instead of doubling them.
const UID_DOMAIN: &str = "postdeck";

/// Rendered calendar plus the count of posts left out for bad dates.
#[derive(Debug)]
pub struct IcsOutput {
    pub body: String,
    pub skipped: usize,
}

/// Render every dated post as a VEVENT inside one VCALENDAR.
///
/// Posts with an empty or unparseable `publish_date` are skipped and
/// counted - one bad record never blocks the export. Zero dated posts
/// still yield a valid empty calendar.
pub fn render(posts: &[Post]) -> IcsOutput {
    let mut body = String::new();
    body.push_str("BEGIN:VCALENDAR\r\n");
    body.push_str("VERSION:2.0\r\n");

    let mut skipped = 0;
    for post in posts {
        let Some(date) = post.parsed_publish_date() else {
            if post.has_malformed_date() {
                skipped += 1;
            }
            continue;
        };

        body.push_str("BEGIN:VEVENT\r\n");
        body.push_str(&format!("UID:post-{}@{}\r\n", post.id, UID_DOMAIN));
        // Source dates carry no time component; midnight, naive local.
        body.push_str(&format!("DTSTART:{}T000000\r\n", date.format("%Y%m%d")));
        body.push_str(&format!("SUMMARY:{}\r\n", escape_text(&post.title)));
        body.push_str("END:VEVENT\r\n");
    }

    body.push_str("END:VCALENDAR\r\n");
    IcsOutput { body, skipped }
}

/// RFC 5545 TEXT escaping: backslash first, then semicolon, comma, newline.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_on(title: &str, date: Option<&str>) -> Post {
        Post::new(
            "instagram".into(),
            title.into(),
            String::new(),
            date.map(String::from),
            None,
            String::new(),
            None,
        )
    }

    #[test]
    fn empty_collection_yields_valid_empty_calendar() {
        let out = render(&[]);
        assert_eq!(out.body, "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n");
        assert_eq!(out.skipped, 0);
    }

    #[test]
    fn dated_post_becomes_a_vevent() {
        let post = post_on("Launch", Some("2024-03-15"));
        let out = render(std::slice::from_ref(&post));
        assert!(out.body.contains("BEGIN:VEVENT\r\n"));
        assert!(out.body.contains(&format!("UID:post-{}@postdeck\r\n", post.id)));
        assert!(out.body.contains("DTSTART:20240315T000000\r\n"));
        assert!(out.body.contains("SUMMARY:Launch\r\n"));
        assert!(out.body.contains("END:VEVENT\r\n"));
    }

    #[test]
    fn uid_is_stable_across_exports() {
        let post = post_on("Launch", Some("2024-03-15"));
        let first = render(std::slice::from_ref(&post));
        let second = render(std::slice::from_ref(&post));
        assert_eq!(first.body, second.body);
    }

    #[test]
    fn undated_and_malformed_posts_are_excluded() {
        let posts = vec![
            post_on("no date", None),
            post_on("empty date", Some("")),
            post_on("bad date", Some("15/03/2024")),
            post_on("good", Some("2024-03-15")),
        ];
        let out = render(&posts);
        assert_eq!(out.body.matches("BEGIN:VEVENT").count(), 1);
        // Only the present-but-garbled date counts as skipped.
        assert_eq!(out.skipped, 1);
    }

    #[test]
    fn summary_text_is_escaped() {
        let post = post_on("a;b,c\\d\ne", Some("2024-03-15"));
        let out = render(std::slice::from_ref(&post));
        assert!(out.body.contains("SUMMARY:a\\;b\\,c\\\\d\\ne\r\n"));
    }
}
