use std::fmt::Display;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lis_trace::input::parse_sequence;
use lis_trace::utils::DEFAULT_MAX_LEN;
use lis_trace::{ExampleStore, Session, Step, Trace};

/// Walk through the O(n²) longest increasing subsequence DP one step at a time.
#[derive(Parser, Debug)]
#[command(name = "lis-trace", version)]
struct Cli {
    /// Sequence values, e.g. `5 2 8 6` or `5,2,8,6`
    #[arg(allow_negative_numbers = true, conflicts_with = "example")]
    values: Vec<String>,

    /// Start from a named preset instead of explicit values
    #[arg(short, long)]
    example: Option<String>,

    /// JSON file with additional presets: [{"name": "...", "values": [..]}]
    #[arg(long)]
    presets: Option<PathBuf>,

    /// List the available presets and exit
    #[arg(long)]
    list_examples: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print only the step at this index (clamped to the last step)
    #[arg(long)]
    step: Option<usize>,

    /// Read navigation commands from stdin
    #[arg(short, long, conflicts_with = "step")]
    interactive: bool,

    /// Reject sequences longer than this
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lis-trace: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let store = load_store(cli.presets.as_deref())?;

    if cli.list_examples {
        return list_examples(&mut io::stdout(), &store).map_err(|e| e.to_string());
    }

    let mut builder = Session::builder().with_max_len(cli.max_len);
    if let Some(name) = &cli.example {
        builder = builder.with_sequence(store.load(name).map_err(|e| e.to_string())?);
    } else if !cli.values.is_empty() {
        let values = parse_sequence(&cli.values.join(" ")).map_err(|e| e.to_string())?;
        builder = builder.with_sequence(values);
    }
    let mut session = builder.with_store(store).build().map_err(|e| e.to_string())?;

    if cli.interactive {
        return run_interactive(&mut session, io::stdin().lock(), &mut io::stdout())
            .map_err(|e| e.to_string());
    }

    match cli.step {
        Some(index) => {
            session.seek(index);
            write_step(cli.format, session.current())
        }
        None => write_trace(cli.format, session.trace()),
    }
}

fn load_store(path: Option<&Path>) -> Result<ExampleStore, String> {
    let Some(path) = path else {
        return Ok(ExampleStore::new());
    };
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read presets file {}: {e}", path.display()))?;
    ExampleStore::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}

fn list_examples(out: &mut impl Write, store: &ExampleStore) -> io::Result<()> {
    // `{:<width$}` pads by chars, so measure names the same way.
    let width = store
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);
    for preset in store.iter() {
        writeln!(
            out,
            "{:<width$}  {}{}",
            preset.name,
            bracketed(&preset.values),
            if preset.is_builtin() { "" } else { "  (user)" },
            width = width
        )?;
    }
    Ok(())
}

fn write_trace(format: OutputFormat, trace: &Trace) -> Result<(), String> {
    match format {
        OutputFormat::Table => {
            for step in trace.steps() {
                print!("{}", render_step(step));
                println!();
            }
            println!(
                "LIS: {} (length {})",
                bracketed(trace.lis()),
                trace.lis().len()
            );
            Ok(())
        }
        OutputFormat::Csv => {
            println!("{CSV_HEADER}");
            for step in trace.steps() {
                println!("{}", csv_row(step));
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(trace).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn write_step(format: OutputFormat, step: &Step) -> Result<(), String> {
    match format {
        OutputFormat::Table => print!("{}", render_step(step)),
        OutputFormat::Csv => {
            println!("{CSV_HEADER}");
            println!("{}", csv_row(step));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(step).map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }
    Ok(())
}

const INTERACTIVE_HELP: &str = "\
commands: n(ext)  p(rev)  f(irst)  l(ast)  g <step>  a <value>  r <position>  e <example>  q(uit)";

fn run_interactive(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{INTERACTIVE_HELP}")?;
    show_position(out, session)?;

    for line in input.lines() {
        let line = line?;
        let (command, arg) = match line.trim().split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line.trim(), ""),
        };
        let outcome: Result<(), String> = match command {
            "" | "n" | "next" => {
                if !session.advance() {
                    writeln!(out, "(already at the last step)")?;
                }
                Ok(())
            }
            "p" | "prev" => {
                if !session.retreat() {
                    writeln!(out, "(already at the first step)")?;
                }
                Ok(())
            }
            "f" | "first" => {
                session.rewind();
                Ok(())
            }
            "l" | "last" => {
                session.fast_forward();
                Ok(())
            }
            "g" | "goto" => arg
                .parse::<usize>()
                .map(|index| {
                    session.seek(index);
                })
                .map_err(|_| format!("not a step index: {arg:?}")),
            "a" | "add" => session.push_text(arg).map(|_| ()).map_err(|e| e.to_string()),
            "r" | "remove" => arg
                .parse::<usize>()
                .map_err(|_| format!("not a position: {arg:?}"))
                .and_then(|index| session.remove(index).map(|_| ()).map_err(|e| e.to_string())),
            "e" | "example" => session.load_example(arg).map_err(|e| e.to_string()),
            "q" | "quit" => break,
            "h" | "help" | "?" => {
                writeln!(out, "{INTERACTIVE_HELP}")?;
                continue;
            }
            other => Err(format!("unknown command {other:?}")),
        };
        if let Err(msg) = outcome {
            writeln!(out, "error: {msg}")?;
        }
        show_position(out, session)?;
    }
    Ok(())
}

fn show_position(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(
        out,
        "-- {}/{} --",
        session.cursor().position(),
        session.cursor().len() - 1
    )?;
    write!(out, "{}", render_step(session.current()))?;
    out.flush()
}

/// Multi-line text block for one step. `[v]` marks position `i`, `<v>`
/// marks position `j`.
fn render_step(step: &Step) -> String {
    let width = cell_width(step);
    let (current, against) = match step.comparison() {
        Some((i, j)) => (Some(i), Some(j)),
        None => (None, None),
    };

    let mut out = format!("Step {}: {}\n", step.index, step.description);
    out.push_str(&format!(
        "  sequence: {}\n",
        render_row(&step.array, width, current, against)
    ));
    if let Some(lengths) = step.lengths() {
        out.push_str(&format!(
            "  lengths:  {}\n",
            render_row(lengths, width, current, None)
        ));
    }
    if let Some(result) = step.result() {
        out.push_str(&format!("  result:   {}\n", bracketed(result)));
    }
    out
}

fn cell_width(step: &Step) -> usize {
    let values = step.array.iter().map(|v| v.to_string().len());
    let lengths = step
        .lengths()
        .unwrap_or(&[])
        .iter()
        .map(|l| l.to_string().len());
    values.chain(lengths).max().unwrap_or(1)
}

fn render_row<T: Display>(
    items: &[T],
    width: usize,
    current: Option<usize>,
    against: Option<usize>,
) -> String {
    items
        .iter()
        .enumerate()
        .map(|(k, item)| {
            let (open, close) = if Some(k) == current {
                ('[', ']')
            } else if Some(k) == against {
                ('<', '>')
            } else {
                (' ', ' ')
            };
            format!("{open}{item:>width$}{close}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bracketed(values: &[i64]) -> String {
    let inner: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", inner.join(", "))
}

const CSV_HEADER: &str = "index,kind,description,current,against,lengths,result";

fn csv_row(step: &Step) -> String {
    let (current, against) = step
        .comparison()
        .map(|(i, j)| (i.to_string(), j.to_string()))
        .unwrap_or_default();
    let lengths = step
        .lengths()
        .map(join_spaced)
        .unwrap_or_default();
    let result = step.result().map(join_spaced).unwrap_or_default();
    format!(
        "{},{},\"{}\",{},{},{},{}",
        step.index,
        step.kind().label(),
        step.description.replace('"', "'"),
        current,
        against,
        lengths,
        result
    )
}

fn join_spaced<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lis_trace::build;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_positionals() {
        let cli = Cli::try_parse_from(["lis-trace", "3", "-1", "4"]).unwrap();
        assert_eq!(cli.values, vec!["3", "-1", "4"]);
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn example_conflicts_with_values() {
        assert!(Cli::try_parse_from(["lis-trace", "-e", "Mixed Sequence", "1"]).is_err());
    }

    #[test]
    fn render_marks_compared_positions() {
        let trace = build(&[5, 2, 8]);
        let text = render_step(&trace.steps()[1]);
        assert!(text.starts_with("Step 1: Comparing elements at positions 0 and 2: 5 < 8\n"));
        assert!(text.contains("  sequence: <5>  2  [8]\n"));
        assert!(text.contains("  lengths:   1   1  [2]\n"));
    }

    #[test]
    fn render_final_step_shows_result() {
        let trace = build(&[5, 2, 8]);
        let text = render_step(&trace.steps()[trace.last_index()]);
        assert!(text.contains("result:   [5, 8]"));
        assert!(!text.contains("lengths"));
    }

    #[test]
    fn csv_rows_leave_absent_fields_empty() {
        let trace = build(&[1, 2]);
        assert_eq!(
            csv_row(&trace.steps()[0]),
            "0,init,\"Initial sequence\",,,1 1,"
        );
        assert_eq!(
            csv_row(&trace.steps()[1]),
            "1,improve,\"Comparing elements at positions 0 and 1: 1 < 2\",1,0,1 2,"
        );
        assert_eq!(
            csv_row(&trace.steps()[2]),
            "2,final,\"Final Longest Increasing Subsequence\",,,,1 2"
        );
    }

    fn interactive(values: Vec<i64>, script: &str) -> (Session, String) {
        let mut session = Session::builder().with_sequence(values).build().unwrap();
        let mut out = Vec::new();
        run_interactive(&mut session, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    fn headers(text: &str) -> Vec<&str> {
        text.lines().filter(|l| l.starts_with("-- ")).collect()
    }

    #[test]
    fn interactive_navigation_stops_at_boundaries() {
        let (session, text) = interactive(vec![1, 2], "p\nn\nl\nn\na oops\nq\nn\n");
        assert!(text.starts_with(INTERACTIVE_HELP));
        assert!(text.contains("(already at the first step)\n"));
        assert!(text.contains("(already at the last step)\n"));
        assert_eq!(
            text.lines().filter(|l| l.starts_with("error: ")).count(),
            1
        );
        assert!(text.contains("error: ") && text.contains("oops"));
        // One header up front, then one per command before `q`.
        assert_eq!(
            headers(&text),
            vec!["-- 0/2 --", "-- 0/2 --", "-- 1/2 --", "-- 2/2 --", "-- 2/2 --", "-- 2/2 --"]
        );
        assert_eq!(session.sequence(), &[1, 2]);
        assert!(session.at_end());
    }

    #[test]
    fn interactive_edits_rebuild_and_rewind() {
        let (session, text) = interactive(vec![1, 2], "l\na 3\ng 2\nr 9\nr x\ne Nope\nf\nq\n");
        assert_eq!(session.sequence(), &[1, 2, 3]);
        assert_eq!(
            headers(&text),
            vec![
                "-- 0/2 --",
                "-- 2/2 --",
                "-- 0/4 --",
                "-- 2/4 --",
                "-- 2/4 --",
                "-- 2/4 --",
                "-- 2/4 --",
                "-- 0/4 --"
            ]
        );
        assert_eq!(
            text.lines().filter(|l| l.starts_with("error: ")).count(),
            3
        );
        assert!(text.contains("error: not a position: \"x\""));
    }

    #[test]
    fn interactive_rejects_unknown_commands_and_ends_at_eof() {
        let (session, text) = interactive(vec![3, 1], "zz\ng -1\n");
        assert!(text.contains("error: unknown command \"zz\""));
        assert!(text.contains("error: not a step index: \"-1\""));
        assert_eq!(headers(&text), vec!["-- 0/1 --"; 3]);
        assert!(session.at_start());
    }

    #[test]
    fn example_list_aligns_non_ascii_names() {
        let mut store = ExampleStore::new();
        store.save("Größe über alles", &[1]).unwrap();
        let mut out = Vec::new();
        list_examples(&mut out, &store).unwrap();
        let text = String::from_utf8(out).unwrap();
        let columns: Vec<usize> = text
            .lines()
            .map(|l| l.chars().take_while(|&c| c != '[').count())
            .collect();
        // Longest name is 16 chars (19 bytes), plus the two-space gap.
        assert_eq!(columns, vec![18; 5]);
        assert!(text.lines().last().unwrap().ends_with("(user)"));
    }
}
