use crate::{
    Len, Options, OutputFormat, Query, QueryErrorKind, Step, WriterEmitter, emit_matches,
    run_query,
};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [STEPS...] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         Steps run in command-line order against a cursor over the input;\n\
         with no steps the whole input is the match.\n\
         \n\
         Steps:\n\
               --seek LIT            Move just past the first LIT\n\
               --expect LIT          Consume LIT, which must come next\n\
               --skip-ws             Skip spaces, tabs, CR and LF\n\
               --skip N              Skip N bytes\n\
               --between FROM TO     Text between FROM and the next TO\n\
               --until LIT           Text up to the first LIT\n\
               --until-any CHARS     Text up to the first of CHARS\n\
               --balanced PAIR       Balanced span, e.g. '{{}}' or '[]'\n\
               --take N              The next N bytes\n\
               --json NAME           Value of JSON property NAME\n\
               --xml-tag NAME        Whole <NAME>...</NAME> element\n\
               --xml-body NAME       Content of <NAME>...</NAME>\n\
               --xml-attr NAME       Value of attribute NAME=\"...\"\n\
               --uint                Leading unsigned integer\n\
               --int                 Leading signed integer\n\
         \n\
         Options:\n\
           -o, --output FILE         Write output to FILE (default stdout)\n\
               --all                 Report every match, not just the first\n\
               --offsets             Prefix each match with OFFSET:LENGTH\n\
               --json-output         Print matches as a JSON array\n\
               --log                 Print the query log to stderr\n\
               --log-window BYTES    Context captured around log positions (default 10)\n\
           -h, --help                Show this help\n\
         \n\
         Exit status: 0 on a match, 1 when nothing matched, 2 on error.\n",
        prog = program
    );
}

fn take_value<'s>(args: &'s [String], i: &mut usize, what: &str, flag: &str) -> &'s str {
    *i += 1;
    if *i >= args.len() {
        eprintln!("Missing {} for {}", what, flag);
        std::process::exit(2);
    }
    &args[*i]
}

fn take_count(args: &[String], i: &mut usize, flag: &str) -> Len {
    let v = take_value(args, i, "N", flag);
    match v.parse() {
        Ok(n) => Len(n),
        Err(_) => {
            eprintln!("Invalid count for {}: {}", flag, v);
            std::process::exit(2);
        }
    }
}

fn parse_args() -> (Options, Query, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "patternseek".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut query = Query::new();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                output = Some(take_value(&args, &mut i, "FILE", flag).to_string());
            }
            "--all" => {
                opts.all_matches = true;
            }
            "--offsets" => {
                opts.output = OutputFormat::Offsets;
            }
            "--json-output" => {
                opts.output = OutputFormat::Json;
            }
            "--log" => {
                opts.logging = true;
            }
            "--log-window" => {
                opts.log_context_window = take_count(&args, &mut i, flag).0;
            }
            "--seek" => {
                let lit = take_value(&args, &mut i, "LIT", flag);
                query.push(Step::Seek(lit.to_string()));
            }
            "--expect" => {
                let lit = take_value(&args, &mut i, "LIT", flag);
                query.push(Step::Expect(lit.to_string()));
            }
            "--skip-ws" => {
                query.push(Step::SkipWhitespace);
            }
            "--skip" => {
                query.push(Step::Skip(take_count(&args, &mut i, flag)));
            }
            "--between" => {
                let from = take_value(&args, &mut i, "FROM", flag).to_string();
                let to = take_value(&args, &mut i, "TO", flag).to_string();
                query.push(Step::Between(from, to));
            }
            "--until" => {
                let lit = take_value(&args, &mut i, "LIT", flag);
                query.push(Step::Until(lit.to_string()));
            }
            "--until-any" => {
                let set = take_value(&args, &mut i, "CHARS", flag);
                query.push(Step::UntilAnyOf(set.to_string()));
            }
            "--balanced" => {
                let pair = take_value(&args, &mut i, "PAIR", flag);
                let mut chars = pair.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(open), Some(close), None) => query.push(Step::Balanced(open, close)),
                    _ => {
                        eprintln!("--balanced expects exactly two characters, got {:?}", pair);
                        std::process::exit(2);
                    }
                }
            }
            "--take" => {
                query.push(Step::Fixed(take_count(&args, &mut i, flag)));
            }
            "--json" => {
                let name = take_value(&args, &mut i, "NAME", flag);
                query.push(Step::JsonProperty(name.to_string()));
            }
            "--xml-tag" => {
                let name = take_value(&args, &mut i, "NAME", flag);
                query.push(Step::XmlTag(name.to_string()));
            }
            "--xml-body" => {
                let name = take_value(&args, &mut i, "NAME", flag);
                query.push(Step::XmlBody(name.to_string()));
            }
            "--xml-attr" => {
                let name = take_value(&args, &mut i, "NAME", flag);
                query.push(Step::XmlAttr(name.to_string()));
            }
            "--uint" => {
                query.push(Step::Unsigned);
            }
            "--int" => {
                query.push(Step::Signed);
            }
            s if s.starts_with('-') && s.len() > 1 => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    (opts, query, CliMode { input, output })
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
}

/// Run the command line. `Ok(false)` means the query matched nothing.
pub fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let (opts, query, mode) = parse_args();

    let content = match mode.input.as_deref() {
        Some(path) if path != "-" => fs::read_to_string(path)?,
        _ => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };

    let result = if opts.logging {
        run_logged(&content, &query, &opts)
    } else {
        run_query(&content, &query, &opts)
    };
    let matches = match result {
        Ok(m) => m,
        Err(e) if matches!(e.kind, QueryErrorKind::NotFound(_)) => {
            eprintln!("{}", e);
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    let mut em = WriterEmitter::with_capacity(&mut out_writer, 64 * 1024);
    emit_matches(&mut em, &matches, opts.output)?;
    em.flush_all()?;
    out_writer.flush()?;

    Ok(!matches.is_empty())
}

#[cfg(feature = "logging")]
fn run_logged<'a>(
    content: &'a str,
    query: &Query,
    opts: &Options,
) -> Result<Vec<crate::Match<'a>>, crate::QueryError> {
    let (matches, log) = crate::run_query_with_log(content, query, opts)?;
    for e in &log {
        eprintln!(
            "[{}] step {} {}: {:?}",
            e.position, e.step, e.message, e.context
        );
    }
    Ok(matches)
}

#[cfg(not(feature = "logging"))]
fn run_logged<'a>(
    content: &'a str,
    query: &Query,
    opts: &Options,
) -> Result<Vec<crate::Match<'a>>, crate::QueryError> {
    run_query(content, query, opts)
}
