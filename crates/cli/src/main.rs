use clap::{Parser, Subcommand};
use saga_core::{
    config::seed_path_from_env_value, ChapterCard, ChapterDraft, ChapterId, CoreConfig,
    ReadingView, SiteState, EMPTY_RESULTS_MESSAGE,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "saga")]
#[command(about = "Deuman Galaxy chapter catalog CLI")]
struct Cli {
    /// Start from this seed catalog (YAML) instead of the bundled one
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List chapters, optionally filtered
    List {
        /// Case-insensitive search text
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Print the full text of a chapter
    Read {
        /// Chapter id
        id: String,
    },
    /// Add a chapter for this run and print the resulting list
    Add {
        #[arg(long)]
        title: Option<String>,
        /// Chapter number (leading integer; defaults to 1)
        #[arg(long, allow_hyphen_values = true)]
        number: Option<String>,
        /// Tags (comma-separated)
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        teaser: Option<String>,
        /// Cover image URL
        #[arg(long)]
        cover: Option<String>,
        /// Chapter text
        #[arg(long)]
        content: Option<String>,
        /// Filter the printed list
        #[arg(long, short)]
        query: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    print!("{}", run(cli)?);
    Ok(())
}

/// Executes one command against a freshly seeded site and returns the text to print.
fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let seed_path = seed_path_from_env_value(cli.seed.map(|p| p.display().to_string()))?;
    let cfg = CoreConfig::new(seed_path, saga_core::constants::DEFAULT_HERO_IMAGE.into())?;
    let mut site = SiteState::initialise(&cfg)?;

    let out = match cli.command {
        Some(Commands::List { query }) => {
            let cards = site.search(query.as_deref().unwrap_or_default());
            render_cards(&cards)
        }
        Some(Commands::Read { id }) => {
            let id = ChapterId::parse(&id)?;
            match site.read(&id) {
                Some(view) => render_reading(&view),
                None => return Err(format!("No chapter with id: {}", id).into()),
            }
        }
        Some(Commands::Add {
            title,
            number,
            tags,
            teaser,
            cover,
            content,
            query,
        }) => {
            let draft = ChapterDraft {
                title,
                number: number.map(Into::into),
                tags,
                teaser,
                cover,
                content,
            };
            let chapter = site.add_chapter(draft);
            let cards = site.search(query.as_deref().unwrap_or_default());
            format!(
                "Added chapter with id: {}\n\n{}",
                chapter.id,
                render_cards(&cards)
            )
        }
        None => "Use 'saga --help' for commands\n".to_string(),
    };

    Ok(out)
}

fn render_cards(cards: &[ChapterCard]) -> String {
    if cards.is_empty() {
        return format!("{EMPTY_RESULTS_MESSAGE}\n");
    }

    let mut out = String::new();
    for card in cards {
        let mut header = card.label.clone();
        if !card.tags.is_empty() {
            header.push_str(" • ");
            header.push_str(&card.tags.join(", "));
        }
        out.push_str(&format!("[{}] {}\n", card.id, header));
        out.push_str(&format!("  {}\n", card.title));
        if !card.teaser.is_empty() {
            out.push_str(&format!("  {}\n", card.teaser));
        }
    }
    out
}

fn render_reading(view: &ReadingView) -> String {
    let mut out = format!("{}\n", view.heading);
    if !view.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", view.tags.join(", ")));
    }
    out.push('\n');
    out.push_str(&view.content);
    if !view.content.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use saga_core::{Chapter, ChapterBuilder};

    fn chapter() -> Chapter {
        ChapterBuilder::build_with_id(
            ChapterId::parse("ch5").unwrap(),
            ChapterDraft::new()
                .with_title("Drift")
                .with_number(5i64)
                .with_tags("A, B, C, D")
                .with_teaser("Adrift")
                .with_content("first\nsecond"),
        )
    }

    #[test]
    fn empty_list_prints_empty_state() {
        assert_eq!(render_cards(&[]), "No chapters match your search.\n");
    }

    #[test]
    fn card_lists_label_tags_title_teaser() {
        let out = render_cards(&[ChapterCard::from_chapter(&chapter())]);
        assert_eq!(out, "[ch5] Chapter 5 • A, B, C\n  Drift\n  Adrift\n");
    }

    #[test]
    fn reading_keeps_line_breaks() {
        let out = render_reading(&ReadingView::from_chapter(&chapter()));
        assert_eq!(out, "Chapter 5: Drift\nTags: A, B, C, D\n\nfirst\nsecond\n");
    }

    #[test]
    fn parses_add_with_negative_number() {
        let cli = Cli::try_parse_from(["saga", "add", "--title", "T", "--number", "-2"]).unwrap();
        match cli.command {
            Some(Commands::Add { title, number, .. }) => {
                assert_eq!(title.as_deref(), Some("T"));
                assert_eq!(number.as_deref(), Some("-2"));
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn read_unknown_id_is_an_error() {
        let cli = Cli::try_parse_from(["saga", "read", "ch99"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.to_string(), "No chapter with id: ch99");
    }

    #[test]
    fn read_seed_chapter_prints_heading() {
        let cli = Cli::try_parse_from(["saga", "read", "ch2"]).unwrap();
        let out = run(cli).unwrap();
        assert!(out.starts_with("Chapter 2: Extinction’s Equation\n"));
    }

    #[test]
    fn list_with_unmatched_query_prints_empty_state() {
        let cli = Cli::try_parse_from(["saga", "list", "-q", "zzzz"]).unwrap();
        assert_eq!(run(cli).unwrap(), "No chapters match your search.\n");
    }

    #[test]
    fn add_reports_id_then_list() {
        let cli = Cli::try_parse_from(["saga", "add", "--title", "Nova Dawn", "-q", "nova dawn"])
            .unwrap();
        let out = run(cli).unwrap();
        assert!(out.starts_with("Added chapter with id: "));
        assert!(out.ends_with("] Chapter 1\n  Nova Dawn\n"));
    }

    #[test]
    fn parses_global_seed_flag() {
        let cli = Cli::try_parse_from(["saga", "list", "--seed", "seed.yaml", "-q", "nova"]).unwrap();
        assert_eq!(cli.seed, Some(PathBuf::from("seed.yaml")));
        assert!(matches!(
            cli.command,
            Some(Commands::List { query: Some(ref q) }) if q == "nova"
        ));
    }
}
