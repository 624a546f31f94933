//! Marksite CLI - Convert Markdown documents to HTML pages
//!
//! Usage:
//!   mscli [OPTIONS] [COMMAND] <FILE>
//!
//! Commands:
//!   render    Print the HTML fragment for a document (default)
//!   page      Build a full page from a template
//!   title     Print the extracted page title
//!   blocks    Show the segmented block structure

use std::env;
use std::fs;
use std::process;

use marksite_core::{
    classify_block, extract_title, markdown_to_html, segment_blocks, BlockKind,
};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    match config.command {
        Command::Render => cmd_render(&input, &config),
        Command::Page => cmd_page(&input, &config),
        Command::Title => cmd_title(&input),
        Command::Blocks => cmd_blocks(&input, &config),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    template: Option<String>,
    output: Option<String>,
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Render,
    Page,
    Title,
    Blocks,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Render;
    let mut format = OutputFormat::Text;
    let mut template = None;
    let mut output = None;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("mscli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-j" | "--json" => format = OutputFormat::Json,
            "-t" | "--template" => {
                i += 1;
                template = Some(
                    args.get(i)
                        .ok_or_else(|| "missing value for --template".to_string())?
                        .clone(),
                );
            }
            "-o" | "--output" => {
                i += 1;
                output = Some(
                    args.get(i)
                        .ok_or_else(|| "missing value for --output".to_string())?
                        .clone(),
                );
            }
            "render" => command = Command::Render,
            "page" => command = Command::Page,
            "title" => command = Command::Title,
            "blocks" => command = Command::Blocks,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        template,
        output,
        format,
    })
}

fn print_help() {
    eprintln!(
        r#"mscli - Markdown to HTML page converter

USAGE:
    mscli [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    render      Print the HTML fragment for a document (default)
    page        Build a full page from a template
    title       Print the extracted page title
    blocks      Show the segmented block structure

OPTIONS:
    -t, --template <FILE>    Template with {{{{ Title }}}} and {{{{ Content }}}} markers
    -o, --output <FILE>      Write the result to a file instead of stdout
    -j, --json               Output in JSON format (blocks command)
    -h, --help               Print help information
    -V, --version            Print version information

EXAMPLES:
    mscli page.md                          Print the HTML fragment
    mscli page -t template.html page.md    Build a full page
    mscli title page.md                    Print the page title
    mscli -j blocks page.md                Block structure as JSON
"#
    );
}

fn write_result(html: &str, config: &Config) -> Result<(), String> {
    match &config.output {
        Some(path) => fs::write(path, html)
            .map_err(|e| format!("failed to write '{}': {}", path, e)),
        None => {
            println!("{}", html);
            Ok(())
        }
    }
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(input: &str, config: &Config) -> Result<(), String> {
    let html = markdown_to_html(input).map_err(|e| e.to_string())?;
    write_result(&html, config)
}

// =============================================================================
// Page Command
// =============================================================================

fn cmd_page(input: &str, config: &Config) -> Result<(), String> {
    let template_path = config
        .template
        .as_ref()
        .ok_or_else(|| "page command requires --template".to_string())?;
    let template = fs::read_to_string(template_path)
        .map_err(|e| format!("failed to read '{}': {}", template_path, e))?;

    let title = extract_title(input).map_err(|e| e.to_string())?;
    let content = markdown_to_html(input).map_err(|e| e.to_string())?;

    let page = template
        .replace("{{ Title }}", title)
        .replace("{{ Content }}", &content);

    write_result(&page, config)
}

// =============================================================================
// Title Command
// =============================================================================

fn cmd_title(input: &str) -> Result<(), String> {
    let title = extract_title(input).map_err(|e| e.to_string())?;
    println!("{}", title);
    Ok(())
}

// =============================================================================
// Blocks Command
// =============================================================================

#[derive(Serialize)]
struct BlockInfo<'a> {
    kind: String,
    lines: usize,
    text: &'a str,
}

fn cmd_blocks(input: &str, config: &Config) -> Result<(), String> {
    let infos: Vec<BlockInfo> = segment_blocks(input)
        .into_iter()
        .map(|block| BlockInfo {
            kind: describe_kind(classify_block(block)),
            lines: block.lines().count(),
            text: block,
        })
        .collect();

    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&infos)
                .map_err(|e| format!("failed to serialize blocks: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Blocks: {}", infos.len());
            for (i, info) in infos.iter().enumerate() {
                let preview: String = info.text.chars().take(60).collect();
                let ellipsis = if info.text.len() > 60 { "..." } else { "" };
                println!(
                    "  [{}] {} ({} line{}): {}{}",
                    i + 1,
                    info.kind,
                    info.lines,
                    if info.lines == 1 { "" } else { "s" },
                    preview.replace('\n', "\\n"),
                    ellipsis
                );
            }
        }
    }

    Ok(())
}

fn describe_kind(kind: BlockKind) -> String {
    match kind {
        BlockKind::Heading(level) => format!("heading{}", level),
        BlockKind::Code => "code".to_string(),
        BlockKind::Quote => "quote".to_string(),
        BlockKind::UnorderedList => "unordered_list".to_string(),
        BlockKind::OrderedList => "ordered_list".to_string(),
        BlockKind::Paragraph => "paragraph".to_string(),
    }
}
