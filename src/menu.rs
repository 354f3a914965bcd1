//! Interactive menu loop.
//!
//! Reads numbered choices from a generic reader and renders to a generic
//! writer, so the whole loop can be driven through pipes in tests. The
//! catalog is immutable for the life of the loop; only the sampled menu
//! options change between iterations.

use std::io::{BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Field, MatchCandidate, SongRecord};
use crate::sampling;
use crate::scoring::{Selection, DEFAULT_TOP_N};
use crate::search::{self, Resolution};

/// Randomized options shown in the menu, resampled on every refresh.
struct MenuOptions {
    year: String,
    artist: String,
    genre: String,
    direct_title: String,
    direct_artist: String,
}

impl MenuOptions {
    /// The caller guarantees a non-empty catalog, so every draw succeeds.
    fn sample<R: Rng>(catalog: &[SongRecord], rng: &mut R) -> Self {
        let year = sampling::random_distinct_value(catalog, Field::Year, rng)
            .unwrap_or_default()
            .to_string();
        let artist = sampling::random_distinct_value(catalog, Field::Artist, rng)
            .unwrap_or_default()
            .to_string();
        let genre = sampling::random_distinct_value(catalog, Field::Genre, rng)
            .unwrap_or_default()
            .to_string();
        let (direct_title, direct_artist, _charter) = sampling::random_song_full(catalog, rng)
            .map(|(t, a, c)| (t.to_string(), a.to_string(), c.to_string()))
            .unwrap_or_default();
        MenuOptions {
            year,
            artist,
            genre,
            direct_title,
            direct_artist,
        }
    }
}

/// Run the menu loop until the user exits or input ends.
pub fn run<R, I, W>(catalog: &[SongRecord], rng: &mut R, input: I, out: &mut W) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut options = MenuOptions::sample(catalog, rng);

    loop {
        writeln!(out)?;
        writeln!(out, "Welcome to Play A Show!")?;
        writeln!(out, "Choose an option:")?;
        writeln!(out, "1. A random song from {}", options.year)?;
        writeln!(out, "2. A random song by {}", options.artist)?;
        writeln!(
            out,
            "3. '{}' by '{}'",
            options.direct_title, options.direct_artist
        )?;
        writeln!(out, "4. A random {} song", options.genre)?;
        writeln!(out, "5. Refresh options")?;
        writeln!(out, "6. Manual fuzzy search")?;
        writeln!(out, "0. Exit")?;
        write!(out, "Enter the number of your choice: ")?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "1" => {
                let query = format!("year:{}", options.year);
                run_query(catalog, &query, rng, &mut lines, out)?;
                options = MenuOptions::sample(catalog, rng);
            }
            "2" => {
                match sampling::random_song_by_artist(catalog, &options.artist, rng) {
                    Some((title, artist)) => {
                        writeln!(out, "Random song from {}: '{}'", artist, title)?;
                    }
                    None => {
                        writeln!(out, "No songs found for the artist '{}'.", options.artist)?;
                    }
                }
                options = MenuOptions::sample(catalog, rng);
            }
            "3" => {
                writeln!(
                    out,
                    "Selected: '{}' by '{}'",
                    options.direct_title, options.direct_artist
                )?;
                options = MenuOptions::sample(catalog, rng);
            }
            "4" => {
                let query = format!("genre:{}", options.genre);
                run_query(catalog, &query, rng, &mut lines, out)?;
                options = MenuOptions::sample(catalog, rng);
            }
            "5" => {
                writeln!(out, "Options refreshed.")?;
                options = MenuOptions::sample(catalog, rng);
            }
            "6" => {
                write!(out, "Enter a Song Title or Artist to search for: ")?;
                out.flush()?;
                let Some(line) = lines.next() else { break };
                let query = line?;
                run_query(catalog, query.trim(), rng, &mut lines, out)?;
            }
            "7" => {
                // Playlist output was removed; the old menu number stays a no-op.
                clear_playlist(out)?;
                options = MenuOptions::sample(catalog, rng);
            }
            "0" => {
                writeln!(out, "Exiting Play A Show. Goodbye!")?;
                break;
            }
            _ => {
                writeln!(out, "Invalid choice.")?;
            }
        }
    }

    Ok(())
}

/// Resolve a query and render the outcome. Genre/year hits pick one match
/// uniformly at random (duplicates and all); fuzzy hits go through the
/// confirmation prompt.
fn run_query<R, I, W>(
    catalog: &[SongRecord],
    query: &str,
    rng: &mut R,
    lines: &mut I,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: Rng,
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    match search::resolve(catalog, query, DEFAULT_TOP_N) {
        Resolution::Genre(matches) => {
            // Strip exactly one prefix, as the resolver does
            let needle = query.strip_prefix("genre:").unwrap_or(query).trim();
            if let Some(song) = matches.choose(rng) {
                writeln!(
                    out,
                    "Random song matching genre '{}': '{}' by '{}'",
                    needle, song.title, song.artist
                )?;
            }
        }
        Resolution::Year(matches) => {
            let needle = query.strip_prefix("year:").unwrap_or(query).trim();
            if let Some(song) = matches.choose(rng) {
                writeln!(
                    out,
                    "Random song from the year '{}': '{}' by '{}'",
                    needle, song.title, song.artist
                )?;
            }
        }
        Resolution::DirectRandom => {
            if let Some((title, artist)) = sampling::random_song(catalog, rng) {
                writeln!(out, "Random song from the catalog: '{}' by '{}'", title, artist)?;
            }
        }
        Resolution::Fuzzy(ranked) => confirm_match(&ranked, lines, out)?,
        Resolution::NoMatch => {
            writeln!(out, "No songs matched '{}'.", query)?;
        }
    }
    Ok(())
}

/// Show the ranked candidates and apply the confirmation decision table.
fn confirm_match<I, W>(ranked: &[MatchCandidate], lines: &mut I, out: &mut W) -> anyhow::Result<()>
where
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    if ranked.is_empty() {
        writeln!(out, "No songs to search.")?;
        return Ok(());
    }

    for (i, candidate) in ranked.iter().enumerate() {
        writeln!(
            out,
            "{}. '{}' by '{}' (Score: {})",
            i + 1,
            candidate.title,
            candidate.artist,
            candidate.score
        )?;
    }
    write!(
        out,
        "Enter 'y' for the best match, a number (1-{}), or 'n' to abort: ",
        ranked.len()
    )?;
    out.flush()?;

    let Some(line) = lines.next() else {
        return Ok(());
    };
    match Selection::parse(&line?, ranked.len()) {
        Selection::Best => {
            let best = &ranked[0];
            writeln!(
                out,
                "Best match: '{}' by '{}' (Score: {})",
                best.title, best.artist, best.score
            )?;
        }
        Selection::Pick(i) => {
            let picked = &ranked[i];
            writeln!(
                out,
                "Selected match: '{}' by '{}' (Score: {})",
                picked.title, picked.artist, picked.score
            )?;
        }
        Selection::Abort => {
            writeln!(out, "Operation aborted.")?;
        }
        Selection::Invalid => {
            writeln!(
                out,
                "Invalid input. Enter 'y', 'n', or a number (1-{}).",
                ranked.len()
            )?;
        }
    }
    Ok(())
}

fn clear_playlist<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Clearing the playlist is disabled.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn catalog() -> Vec<SongRecord> {
        serde_json::from_str(
            r#"[
                {"Name":"Song A","Artist":"X","Year":"2000","Genre":"Rock","Charter":"c1","chartsAvailable":15},
                {"Name":"Song B","Artist":"Y","Year":"2001","Genre":"Metal","Charter":"c2","chartsAvailable":240}
            ]"#,
        )
        .unwrap()
    }

    fn drive(input: &str) -> String {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let mut out = Vec::new();
        run(&catalog, &mut rng, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let out = drive("0\n");
        assert!(out.contains("Welcome to Play A Show!"));
        assert!(out.contains("0. Exit"));
        assert!(out.contains("Exiting Play A Show. Goodbye!"));
    }

    #[test]
    fn test_eof_ends_loop() {
        let out = drive("");
        assert!(out.contains("Choose an option:"));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let out = drive("9\n0\n");
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn test_refresh() {
        let out = drive("5\n0\n");
        assert!(out.contains("Options refreshed."));
    }

    #[test]
    fn test_year_option_uses_sampled_year() {
        let out = drive("1\n0\n");
        assert!(out.contains("Random song from the year '"));
    }

    #[test]
    fn test_artist_option() {
        let out = drive("2\n0\n");
        assert!(out.contains("Random song from "));
    }

    #[test]
    fn test_genre_option() {
        let out = drive("4\n0\n");
        assert!(out.contains("Random song matching genre '"));
    }

    #[test]
    fn test_clear_playlist_is_noop() {
        let out = drive("7\n0\n");
        assert!(out.contains("Clearing the playlist is disabled."));
    }

    #[test]
    fn test_manual_search_best() {
        let out = drive("6\nSong A\ny\n0\n");
        assert!(out.contains("1. 'Song A' by 'X' (Score: 100)"));
        assert!(out.contains("Best match: 'Song A' by 'X' (Score: 100)"));
    }

    #[test]
    fn test_manual_search_pick_by_number() {
        let out = drive("6\nSong A\n2\n0\n");
        assert!(out.contains("Selected match: 'Song B' by 'Y'"));
    }

    #[test]
    fn test_manual_search_abort_and_invalid() {
        let out = drive("6\nSong A\nn\n0\n");
        assert!(out.contains("Operation aborted."));

        let out = drive("6\nSong A\nmaybe\n0\n");
        assert!(out.contains("Invalid input."));
    }

    #[test]
    fn test_manual_search_structured_year() {
        let out = drive("6\nyear:2001\n0\n");
        assert!(out.contains("Random song from the year '2001': 'Song B' by 'Y'"));
    }

    #[test]
    fn test_manual_search_structured_no_match() {
        let out = drive("6\nyear:1998\n0\n");
        assert!(out.contains("No songs matched 'year:1998'."));
    }

    #[test]
    fn test_genre_display_strips_prefix_once() {
        // A genre field that itself contains "genre:" — the displayed
        // needle must be what the resolver matched on, stripped once
        let catalog: Vec<SongRecord> = serde_json::from_str(
            r#"[{"Name":"Song A","Artist":"X","Year":"2000","Genre":"Genre:Rock","Charter":"c1","chartsAvailable":15}]"#,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut out = Vec::new();
        run(
            &catalog,
            &mut rng,
            Cursor::new("6\ngenre:genre:rock\n0\n"),
            &mut out,
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Random song matching genre 'genre:rock': 'Song A' by 'X'"));
    }

    #[test]
    fn test_manual_search_csv_keyword() {
        let out = drive("6\ncsv\n0\n");
        assert!(out.contains("Random song from the catalog: '"));
    }
}
