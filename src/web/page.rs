use axum::extract::State;
use axum::response::Html;

use crate::quiz::Round;
use crate::web::{image_url, AppState, WebError};

const TEMPLATE: &str = include_str!("../../public/index.html");

pub async fn render_index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let round = state.next_round()?;
    Ok(Html(render_page(&round)))
}

/// Fills the page template with the round's picture and one button per option.
pub fn render_page(round: &Round) -> String {
    let options = round
        .options
        .iter()
        .map(|name| {
            format!(
                r#"<button class="option-button" data-correct="{}">{}</button>"#,
                round.is_correct(name),
                escape_html(name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    fill_template(
        TEMPLATE,
        &[
            ("image_url", &escape_html(&image_url(&round.correct.image))),
            ("answer", &escape_html(&round.correct.name)),
            ("options", &options),
        ],
    )
}

// Substitutes `{{key}}` placeholders in one pass; inserted values are never rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        filled.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            filled.push_str(&rest[start..]);
            return filled;
        };

        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => filled.push_str(value),
            None => filled.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    filled.push_str(rest);
    filled
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Entry;

    fn round() -> Round {
        Round {
            correct: Entry::new("アナグマ", "anaguma.svg"),
            options: vec!["ハクビシン".into(), "アナグマ".into(), "タヌキ".into()],
        }
    }

    #[test]
    fn page_shows_image_and_options_in_order() {
        let html = render_page(&round());
        assert!(html.contains(r#"src="/images/anaguma.svg""#));

        let first = html.find("ハクビシン</button>").unwrap();
        let second = html.find("アナグマ</button>").unwrap();
        let third = html.find("タヌキ</button>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn only_the_answer_is_marked_correct() {
        let html = render_page(&round());
        assert_eq!(html.matches(r#"data-correct="true""#).count(), 1);
        assert_eq!(html.matches(r#"data-correct="false""#).count(), 2);
        assert!(html.contains(r#"data-correct="true">アナグマ</button>"#));
    }

    #[test]
    fn names_are_escaped() {
        let round = Round {
            correct: Entry::new("<b>", "x\".png"),
            options: vec!["<b>".into(), "a&b".into(), "c".into()],
        };
        let html = render_page(&round);
        assert!(html.contains("&lt;b&gt;</button>"));
        assert!(html.contains("a&amp;b</button>"));
        assert!(html.contains(r#"src="/images/x%22.png""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn wrong_answer_message_names_the_answer() {
        let html = render_page(&round());
        assert!(html.contains("残念！正解は「アナグマ」でした。"));
        assert!(html.contains("正解！おめでとう"));
    }

    #[test]
    fn page_offers_a_share_link() {
        let html = render_page(&round());
        assert!(html.contains(r#"id="share-button""#));
        assert!(html.contains("https://twitter.com/intent/tweet"));
        assert!(html.contains("Xで結果をシェア"));
    }

    #[test]
    fn placeholder_text_in_an_image_is_not_expanded() {
        let round = Round {
            correct: Entry::new("B", "{{options}}.png"),
            options: vec!["A".into(), "B".into(), "C".into()],
        };
        let html = render_page(&round);
        assert!(html.contains(r#"src="/images/%7B%7Boptions%7D%7D.png""#));
        assert_eq!(html.matches("<button").count(), 3);
    }

    #[test]
    fn template_values_are_not_rescanned() {
        let filled = fill_template("[{{a}}|{{b}}|{{c}}]", &[("a", "{{b}}"), ("b", "x")]);
        assert_eq!(filled, "[{{b}}|x|{{c}}]");
        assert_eq!(fill_template("tail {{open", &[]), "tail {{open");
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("タヌキ"), "タヌキ");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}
