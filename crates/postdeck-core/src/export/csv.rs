//! CSV rendering, RFC 4180 quoting.

use crate::domain::Post;

const HEADER: &str = "id,platform,title,description,publish_date,status,tags,series_id";

/// Render the full collection as CSV, one row per post in input order.
///
/// Never fails: every field is a string and quoting covers anything a
/// field can contain. Absent `publish_date`/`series_id` render empty.
pub fn render(posts: &[Post]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\r\n");

    for post in posts {
        let fields = [
            post.id.to_string(),
            post.platform.clone(),
            post.title.clone(),
            post.description.clone(),
            post.publish_date.clone().unwrap_or_default(),
            post.status.clone(),
            post.tags.clone(),
            post.series_id.clone().unwrap_or_default(),
        ];
        let row: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }

    out
}

/// Quote a field when it contains a separator, quote, or line break;
/// embedded quotes are doubled.
fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
