use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use serde_json::Value;

use filter_prompts::config::Config;
use filter_prompts::error::FilterError;
use filter_prompts::filters::{CompanyFilters, PersonFilters, ReplyShape, SkillSet};
use filter_prompts::json::validator::{self, JsonParse};
use filter_prompts::prompts;
use filter_prompts::prompts::template::FilterTemplate;

#[derive(Parser, Debug)]
#[command(name = "filter-prompts")]
#[command(about = "Build search-filter prompts and check the JSON sent back")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// Pretty-print JSON output (overrides FILTER_PROMPTS_PRETTY)
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the instruction text for a template
    Prompt { kind: Kind },
    /// Print the embedded filter template as JSON
    Template { kind: Kind },
    /// Parse text as JSON; prints the value, or `false` when it does not parse
    Validate {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
        /// Report the parse error and exit non-zero instead of printing `false`
        #[arg(long)]
        strict: bool,
    },
    /// Decode a generated reply into the typed filters for a template
    Decode {
        kind: Kind,
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print a JSON Schema for the reply to a template
    Schema { kind: Kind },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Person,
    Company,
    Skills,
}

impl Kind {
    fn prompt(self) -> &'static str {
        match self {
            Kind::Person => prompts::person::person_prompt(),
            Kind::Company => prompts::company::company_prompt(),
            Kind::Skills => prompts::skills::enhance_skills_prompt(),
        }
    }

    fn template(self) -> &'static FilterTemplate {
        match self {
            Kind::Person => &prompts::person::PERSON_TEMPLATE,
            Kind::Company => &prompts::company::COMPANY_TEMPLATE,
            Kind::Skills => &prompts::skills::SKILLS_TEMPLATE,
        }
    }

    fn response_schema(self) -> Result<Value, FilterError> {
        match self {
            Kind::Person => PersonFilters::response_schema(),
            Kind::Company => CompanyFilters::response_schema(),
            Kind::Skills => SkillSet::response_schema(),
        }
    }

    fn decode(self, reply: &str) -> Result<Value, FilterError> {
        let value = match self {
            Kind::Person => serde_json::to_value(PersonFilters::from_reply(reply)?)?,
            Kind::Company => serde_json::to_value(CompanyFilters::from_reply(reply)?)?,
            Kind::Skills => serde_json::to_value(SkillSet::from_reply(reply)?)?,
        };
        Ok(value)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let config = Config::from_env()?;
    env_logger::builder().filter_level(config.log_level).init();

    let args = Args::parse();
    let pretty = args.pretty || config.pretty;

    match args.cmd {
        Command::Prompt { kind } => {
            log::info!("printing {kind:?} prompt");
            print!("{}", kind.prompt());
        }
        Command::Template { kind } => {
            let template = kind.template();
            // The embedded copy is what the generative side actually sees.
            let embedded = validator::extract_embedded_json(kind.prompt())
                .ok_or_else(|| FilterError::InvalidJson("prompt has no embedded template".into()))?;
            validator::parse_json(embedded).into_result()?;
            if pretty {
                println!("{}", template.to_json_pretty()?);
            } else {
                println!("{}", template.to_json());
            }
        }
        Command::Validate { file, strict } => {
            let input = read_input(file.as_ref())?;
            if strict {
                match validator::parse_json(&input) {
                    JsonParse::Parsed(value) => println!("{}", render(&value, pretty)?),
                    JsonParse::Invalid { reason } => {
                        log::warn!("input is not valid JSON: {reason}");
                        return Err(FilterError::InvalidJson(reason).into());
                    }
                }
            } else {
                let value = validator::is_valid_json(&input);
                println!("{}", render(&value, pretty)?);
            }
        }
        Command::Decode { kind, file } => {
            let input = read_input(file.as_ref())?;
            let filters = kind.decode(&input)?;
            println!("{}", render(&filters, pretty)?);
        }
        Command::Schema { kind } => {
            let schema = kind.response_schema()?;
            println!("{}", render(&schema, pretty)?);
        }
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String, FilterError> {
    match file {
        Some(path) => {
            log::debug!("reading {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn render(value: &Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
