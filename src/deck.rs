//! The built-in SajuChain investor deck.
//!
//! The deck is a fixed content model: a four-color palette, the title
//! copy, and four content-slide specs, rendered into a `Presentation`
//! in one pass.

use crate::model::{
    Color, Metadata, Palette, Paragraph, Presentation, Slide, SlideLayout, TextStyle,
};

/// File name the deck is written to in the current working directory.
pub const OUTPUT_FILE: &str = "sajuchain_pitch_deck.pptx";

/// Deck-wide color palette.
pub const PALETTE: Palette = Palette {
    // deep purple
    background: Color::new(0x1A, 0x0B, 0x2E),
    // gold/amber
    accent: Color::new(0xF5, 0x9E, 0x0B),
    text_primary: Color::new(0xFF, 0xFF, 0xFF),
    // light purple
    text_secondary: Color::new(0xE9, 0xD5, 0xFF),
};

const TITLE_SIZE_PT: u32 = 60;
const SUBTITLE_SIZE_PT: u32 = 24;
const BODY_SIZE_PT: u32 = 18;

const DECK_TITLE: &str = "SajuChain";
const DECK_SUBTITLE: &str = "Destiny on Chain: Where Ancient Wisdom Meets Eternal Ledger";
const DECK_TAGLINE: &str = "Investor Presentation 2026";

/// Title and newline-delimited bullet copy for one content slide.
struct SlideSpec {
    title: &'static str,
    bullets: &'static str,
}

const CONTENT_SLIDES: [SlideSpec; 4] = [
    SlideSpec {
        title: "The Problem: Uncertainty & Ephemerality",
        bullets: "\
• Subjective Interpretation: Relies on individual skill, inconsistent results.
• Lack of Permanence: Physical amulets lost. No digital record.
• Data Privacy: Sensitive birth data shared with unverified services.",
    },
    SlideSpec {
        title: "The Solution: SajuChain",
        bullets: "\
1. Algorithmic Precision: lunar-javascript + GPT-4o.
2. Immutable Ownership: Minted as Compressed NFTs (cNFT) on Solana.
3. Digital Mysticism: Ritualistic UI/UX.",
    },
    SlideSpec {
        title: "Technical Architecture",
        bullets: "\
• Frontend: Next.js 16, Tailwind CSS v4, Framer Motion
• Blockchain: Solana Web3.js, Metaplex (Umi)
• AI Engine: Hybrid Logic (Deterministic + Generative)",
    },
    SlideSpec {
        title: "Roadmap & Vision",
        bullets: "\
• Phase 1 (Now): MVP, Devnet, UI/UX V2 (Completed)
• Phase 2 (Q3 2026): Mainnet, Mobile App
• Phase 3 (2027): Oracle DAO, Metaverse Identity",
    },
];

/// Build the five-slide investor deck.
///
/// # Example
///
/// ```no_run
/// let deck = deckgen::deck::investor_deck();
/// deckgen::write_file(&deck, deckgen::deck::OUTPUT_FILE)?;
/// # Ok::<(), deckgen::Error>(())
/// ```
pub fn investor_deck() -> Presentation {
    let mut pres = Presentation {
        metadata: Metadata {
            title: Some(DECK_TITLE.to_string()),
            author: Some("SajuChain Labs".to_string()),
            subject: Some(DECK_TAGLINE.to_string()),
        },
        ..Default::default()
    };

    pres.add_slide(title_slide());
    for spec in &CONTENT_SLIDES {
        pres.add_slide(content_slide(spec));
    }
    pres
}

fn title_slide() -> Slide {
    let mut slide = Slide::new(SlideLayout::Title).with_background(PALETTE.background);

    slide.set_title(
        DECK_TITLE,
        TextStyle {
            bold: true,
            size_pt: Some(TITLE_SIZE_PT),
            color: Some(PALETTE.accent),
            ..Default::default()
        },
    );
    slide.add_body_paragraph(Paragraph::styled(
        DECK_SUBTITLE,
        TextStyle {
            size_pt: Some(SUBTITLE_SIZE_PT),
            color: Some(PALETTE.text_primary),
            ..Default::default()
        },
    ));
    slide.add_body_paragraph(Paragraph::styled(
        DECK_TAGLINE,
        TextStyle {
            size_pt: Some(SUBTITLE_SIZE_PT),
            color: Some(PALETTE.text_secondary),
            ..Default::default()
        },
    ));
    slide
}

fn content_slide(spec: &SlideSpec) -> Slide {
    let mut slide = Slide::new(SlideLayout::TitleAndContent).with_background(PALETTE.background);

    // Title size is inherited from the master's title style.
    slide.set_title(
        spec.title,
        TextStyle {
            bold: true,
            color: Some(PALETTE.accent),
            ..Default::default()
        },
    );
    for line in spec.bullets.lines() {
        slide.add_body_paragraph(Paragraph::styled(
            line,
            TextStyle {
                size_pt: Some(BODY_SIZE_PT),
                color: Some(PALETTE.text_primary),
                ..Default::default()
            },
        ));
    }
    slide
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_five_slides() {
        assert_eq!(investor_deck().slide_count(), 5);
    }

    #[test]
    fn test_title_slide_content() {
        let deck = investor_deck();
        let title = &deck.slides[0];
        assert_eq!(title.layout, SlideLayout::Title);
        assert_eq!(title.title_text(), "SajuChain");
        assert!(title.body_text().contains("Investor Presentation 2026"));
    }

    #[test]
    fn test_title_runs_use_accent_color() {
        for slide in &investor_deck().slides {
            for para in &slide.title {
                for run in &para.runs {
                    assert_eq!(run.style.color, Some(PALETTE.accent));
                    assert!(run.style.bold);
                }
            }
        }
    }

    #[test]
    fn test_body_runs_never_use_accent_color() {
        for slide in &investor_deck().slides {
            for para in &slide.body {
                for run in &para.runs {
                    let color = run.style.color.expect("body runs are colored");
                    assert_ne!(color, PALETTE.accent);
                    assert!(
                        color == PALETTE.text_primary || color == PALETTE.text_secondary,
                        "body color {color} not in palette"
                    );
                }
            }
        }
    }

    #[test]
    fn test_content_slides_have_bulleted_bodies() {
        let deck = investor_deck();
        for slide in &deck.slides[1..] {
            assert_eq!(slide.layout, SlideLayout::TitleAndContent);
            assert!(!slide.title_text().is_empty());
            assert!(!slide.body.is_empty());
            let body = slide.body_text();
            assert!(
                body.contains('•') || body.contains("1."),
                "body has no bullet separator: {body}"
            );
        }
    }

    #[test]
    fn test_every_slide_has_background_fill() {
        for slide in &investor_deck().slides {
            assert_eq!(slide.background, Some(PALETTE.background));
        }
    }
}
