//! Panel Document Rendering
//!
//! Builds the complete HTML document shown in the panel view. Pure string
//! templating over the current entries: the renderer keeps no state of its
//! own and produces identical output for identical input.

use crate::host::{AssetLocator, HostError, StyleAsset};

/// Interaction script embedded verbatim in every render
///
/// On click of the submit control it posts the entry text followed by a
/// refresh request over the host bridge, then clears the input field.
const SUBMIT_SCRIPT: &str = r#"(function() {
        const host = window.acquirePanelHost();
        const btnAdd = document.getElementById('add-todo');

        btnAdd.addEventListener('click', () => {
          const input = document.getElementById('todo-input');
          host.postMessage({ type: 'addTodo', text: input.value });
          host.postMessage({ type: 'update' });

          input.value = '';
        });
      }())"#;

/// Render the full panel document for the given entries
///
/// Entry texts are HTML-escaped before embedding, so markup-significant
/// characters display literally instead of being interpreted by the view.
pub fn render_panel(entries: &[String], assets: &impl AssetLocator) -> Result<String, HostError> {
    let style_reset = assets.locate(StyleAsset::Reset)?;
    let style_theme = assets.locate(StyleAsset::BaseTheme)?;

    let mut list_html = String::new();
    for text in entries {
        list_html.push_str("<li>");
        list_html.push_str(&escape_html(text));
        list_html.push_str("</li>");
    }

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"UTF-8\">\n\
           <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
           <link rel='stylesheet' href='{style_reset}' />\n\
           <link rel='stylesheet' href='{style_theme}' />\n\
           <title>Todo</title>\n\
         </head>\n\
         <body>\n\
           <h1>Todo</h1>\n\
           <form id=\"todo-form\">\n\
             <input id=\"todo-input\" type=\"text\" />\n\
             <button id=\"add-todo\">Add</button>\n\
           </form>\n\
           <ul id=\"todo-list\">{list_html}</ul>\n\
           <script>\n\
             {script}\n\
           </script>\n\
         </body>\n\
         </html>",
        style_reset = escape_html(&style_reset),
        style_theme = escape_html(&style_theme),
        list_html = list_html,
        script = SUBMIT_SCRIPT,
    ))
}

/// Escape text for embedding as element content or a quoted attribute value
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MediaAssets;

    impl AssetLocator for MediaAssets {
        fn locate(&self, asset: StyleAsset) -> Result<String, HostError> {
            Ok(format!("https://host.test/media/{}", asset.file_name()))
        }
    }

    struct BrokenAssets;

    impl AssetLocator for BrokenAssets {
        fn locate(&self, asset: StyleAsset) -> Result<String, HostError> {
            Err(HostError::AssetNotFound(asset))
        }
    }

    fn entries(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn one_list_element_per_entry_in_order() {
        let html = render_panel(&entries(&["first", "second", "third"]), &MediaAssets).unwrap();

        assert_eq!(html.matches("<li>").count(), 3);
        let first = html.find("<li>first</li>").unwrap();
        let second = html.find("<li>second</li>").unwrap();
        let third = html.find("<li>third</li>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn empty_list_renders_a_well_formed_document() {
        let html = render_panel(&[], &MediaAssets).unwrap();

        assert_eq!(html.matches("<li>").count(), 0);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<ul id=\"todo-list\"></ul>"));
        assert!(html.contains("href='https://host.test/media/reset.css'"));
        assert!(html.contains("href='https://host.test/media/theme.css'"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn document_contains_form_and_script() {
        let html = render_panel(&[], &MediaAssets).unwrap();

        assert!(html.contains("<form id=\"todo-form\">"));
        assert!(html.contains("<input id=\"todo-input\" type=\"text\" />"));
        assert!(html.contains("<button id=\"add-todo\">Add</button>"));
        assert!(html.contains("window.acquirePanelHost()"));
        assert!(html.contains("{ type: 'addTodo', text: input.value }"));
        assert!(html.contains("{ type: 'update' }"));
    }

    #[test]
    fn entry_text_is_escaped() {
        let html = render_panel(&entries(&["<script>alert('x')</script>"]), &MediaAssets).unwrap();

        assert!(html.contains("<li>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</li>"));
        assert!(!html.contains("<li><script>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let items = entries(&["a", "b"]);
        let first = render_panel(&items, &MediaAssets).unwrap();
        let second = render_panel(&items, &MediaAssets).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_asset_is_a_fatal_error() {
        let result = render_panel(&[], &BrokenAssets);
        assert!(matches!(result, Err(HostError::AssetNotFound(StyleAsset::Reset))));
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(escape_html("a & b < c > d \"e\" 'f'"), "a &amp; b &lt; c &gt; d &quot;e&quot; &#39;f&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
