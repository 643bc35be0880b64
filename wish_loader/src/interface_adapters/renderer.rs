use crate::domain::WishCard;
use crate::domain::ports::WishRenderer;
use std::io::{self, Write};
use std::sync::Mutex;

// Stand-in for the page's wish wall: one JSON line per card.
pub struct ConsoleRenderer<W> {
    out: Mutex<W>,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write> WishRenderer for ConsoleRenderer<W> {
    fn render(&self, cards: &[WishCard]) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::other("renderer output poisoned"))?;
        for card in cards {
            serde_json::to_writer(&mut *out, card)?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WishRecord;

    #[test]
    fn each_card_is_written_as_one_json_line() {
        let renderer = ConsoleRenderer::new(Vec::new());
        let cards = [
            WishCard::from_record(&WishRecord {
                timestamp: "2024-01-05".to_string(),
                name: "budi".to_string(),
                message: "Sehat selalu".to_string(),
                photo_url: None,
            }),
            WishCard::from_record(&WishRecord {
                timestamp: "2024-01-01".to_string(),
                name: "Ana".to_string(),
                message: "Happy bday!".to_string(),
                photo_url: Some("https://example.com/a.png".to_string()),
            }),
        ];

        renderer.render(&cards).expect("expected render to succeed");

        let output = String::from_utf8(renderer.into_inner()).expect("expected utf8 output");
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).expect("expected json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["initial"], "B");
        assert_eq!(lines[0]["display_date"], "5/1/2024");
        assert_eq!(lines[1]["photo_url"], "https://example.com/a.png");
    }
}
