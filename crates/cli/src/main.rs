//! lomaji-rhyme CLI: syllable analysis and rhyme search over a lomaji dictionary.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use lomaji_rhyme_core::language::analyze_text;
use lomaji_rhyme_core::language::finals::find_final;
use lomaji_rhyme_core::rhyme::{
    SyllableQuery, SyllableRhymes, WordRhymes, find_rhyming_syllables,
    find_rhyming_words_by_input, find_rhyming_words_by_word,
};
use lomaji_rhyme_core::store::file::{dictionary_path, load_dictionary, save_dictionary};
use lomaji_rhyme_core::store::memory::MemoryStore;
use lomaji_rhyme_core::RhymeOptions;

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "lomaji-rhyme",
    about = "Syllable analysis and rhyme search for Hō-lô romanization",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dictionary file (default: $LOMAJI_RHYME_DICT or ~/.local/share/lomaji-rhyme/dictionary.json)
    #[arg(long, global = true)]
    dict: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Show verbose output
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the features of every syllable
    Analyze(AnalyzeArgs),
    /// Find stored syllables rhyming with a syllable
    Syllable(SyllableArgs),
    /// Find stored words rhyming with a word
    Word(WordArgs),
    /// Add a word to the dictionary
    Add(AddArgs),
    /// Respell a stored word
    Update(UpdateArgs),
    /// Remove a word from the dictionary
    Remove(RemoveArgs),
    /// List stored words
    List,
    /// List the rhyme finals with how many stored syllables use each
    Finals(FinalsArgs),
}

// ─── Rhyme options (embedded in each search) ─────────────────────

#[derive(Parser, Debug)]
struct RhymeArgs {
    /// Match nasal and oral syllables alike
    #[arg(long, default_value_t = false)]
    ignore_nasal: bool,

    /// Accept similar vowels (a ~ ia ~ oa, i ~ ui, ...)
    #[arg(long, default_value_t = false)]
    similar_vowel: bool,

    /// Accept any final consonant
    #[arg(long, default_value_t = false)]
    ignore_final: bool,

    /// Accept finals with the same place of articulation
    #[arg(long, default_value_t = false)]
    same_articulation: bool,

    /// Require the same tone
    #[arg(long, default_value_t = false)]
    same_tone: bool,

    /// Options as JSON, e.g. '{"SimilarVowel": true}'. Flags are added on top.
    #[arg(long)]
    options: Option<String>,
}

impl RhymeArgs {
    fn to_options(&self) -> Result<RhymeOptions> {
        let mut opts = match &self.options {
            Some(json) => RhymeOptions::from_json(json)?,
            None => RhymeOptions::default(),
        };
        opts.ignore_nasal_sound |= self.ignore_nasal;
        opts.similar_vowel |= self.similar_vowel;
        opts.ignore_final_sound |= self.ignore_final;
        opts.same_articulation_part |= self.same_articulation;
        opts.same_tone |= self.same_tone;
        Ok(opts)
    }
}

// ─── Analyze ─────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Syllables, words or phrases
    #[arg(required = true)]
    text: Vec<String>,
}

// ─── Syllable ────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct SyllableArgs {
    /// Syllable to rhyme with
    lomaji: String,

    /// Results per page
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    #[command(flatten)]
    rhyme: RhymeArgs,
}

// ─── Word ────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct WordArgs {
    /// Word to rhyme with, e.g. "tâi-oân"
    lomaji: String,

    /// Number of trailing syllables that must rhyme
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Look the word up in the dictionary and use its stored syllables
    #[arg(long, default_value_t = false)]
    stored: bool,

    /// Hanji of the stored word, to pick between homographs
    #[arg(long, requires = "stored")]
    hanji: Option<String>,

    #[command(flatten)]
    rhyme: RhymeArgs,
}

// ─── Data entry ──────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct AddArgs {
    /// Word in lomaji
    lomaji: String,

    /// Word in hanji
    #[arg(long)]
    hanji: Option<String>,
}

#[derive(Parser, Debug)]
struct UpdateArgs {
    /// Id of the word to change
    word_id: u32,

    /// New spelling in lomaji
    lomaji: String,

    /// New hanji
    #[arg(long)]
    hanji: Option<String>,
}

#[derive(Parser, Debug)]
struct RemoveArgs {
    /// Id of the word to remove
    word_id: u32,
}

// ─── Finals ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct FinalsArgs {
    /// Show a single final, e.g. "ang"
    lomaji: Option<String>,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let dict = cli.dict.clone().unwrap_or_else(dictionary_path);
    let result = match cli.command {
        Command::Analyze(args) => run_analyze(args, cli.json),
        Command::Syllable(args) => run_syllable(args, &dict, cli.json),
        Command::Word(args) => run_word(args, &dict, cli.json),
        Command::Add(args) => run_add(args, &dict),
        Command::Update(args) => run_update(args, &dict),
        Command::Remove(args) => run_remove(args, &dict),
        Command::List => run_list(&dict, cli.json),
        Command::Finals(args) => run_finals(args, &dict, cli.json),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

fn open_dictionary(path: &std::path::Path) -> Result<MemoryStore> {
    load_dictionary(path)
        .with_context(|| format!("Cannot open dictionary {}", path.display()))
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_words(words: &[lomaji_rhyme_core::WordRecord]) {
    for w in words {
        match &w.hanji {
            Some(h) => println!("{:>6}  {}  {}", w.id, w.lomaji, h),
            None => println!("{:>6}  {}", w.id, w.lomaji),
        }
    }
}

// ─── Runners ─────────────────────────────────────────────────────

fn run_analyze(args: AnalyzeArgs, json: bool) -> Result<()> {
    let features: Vec<_> = args.text.iter().flat_map(|t| analyze_text(t)).collect();
    if features.is_empty() {
        bail!("No syllables found in input");
    }
    if json {
        return print_json(&serde_json::to_value(&features)?);
    }
    for f in &features {
        println!(
            "{}\tconsonant={} vowel={} coda={} nasal={} tone={}",
            f.lomaji,
            f.consonant,
            f.vowel,
            f.coda.as_deref().unwrap_or("-"),
            f.nasal,
            f.tone
        );
        if !f.is_resolved() {
            log::warn!("{:?} has no vowel nucleus", f.lomaji);
        }
    }
    Ok(())
}

fn run_syllable(args: SyllableArgs, dict: &std::path::Path, json: bool) -> Result<()> {
    if args.limit == 0 || args.page == 0 {
        bail!("--limit and --page must be at least 1");
    }
    let opts = args.rhyme.to_options()?;
    let store = open_dictionary(dict)?;
    let query = SyllableQuery::from_lomaji(&args.lomaji).paginate(args.limit, args.page);
    let rhymes = find_rhyming_syllables(&store, &query, &opts)?;

    if json {
        return print_json(&rhymes.to_json_value());
    }
    match rhymes {
        SyllableRhymes::Found { keyword, data, pagination } => {
            println!(
                "{}: {} match(es), page {}/{}",
                keyword,
                pagination.total_items,
                pagination.current_page.unwrap_or(1),
                pagination.total_pages.unwrap_or(1)
            );
            for s in data {
                println!(
                    "{:>6}  {}  {}",
                    s.id,
                    s.features.lomaji,
                    s.hanji.as_deref().unwrap_or("")
                );
            }
        }
        SyllableRhymes::NotFound { message } => println!("{}", message),
    }
    Ok(())
}

fn run_word(args: WordArgs, dict: &std::path::Path, json: bool) -> Result<()> {
    let opts = args.rhyme.to_options()?;
    let store = open_dictionary(dict)?;
    let rhymes = if args.stored {
        find_rhyming_words_by_word(
            &store,
            &args.lomaji,
            args.hanji.as_deref(),
            args.count,
            &opts,
        )?
    } else {
        find_rhyming_words_by_input(&store, &args.lomaji, args.count, &opts)?
    };

    if json {
        return print_json(&rhymes.to_json_value());
    }
    match &rhymes {
        WordRhymes::Found { data } => {
            println!("{}: {} rhyming word(s)", args.lomaji, data.len());
            print_words(data);
        }
        WordRhymes::NotFound { message } => println!("{}", message),
    }
    Ok(())
}

fn run_add(args: AddArgs, dict: &std::path::Path) -> Result<()> {
    let mut store = open_dictionary(dict)?;
    let id = store.add_word(&args.lomaji, args.hanji.as_deref())?;
    save_dictionary(dict, &store)?;
    println!("Added word {}: {}", id, args.lomaji);
    Ok(())
}

fn run_update(args: UpdateArgs, dict: &std::path::Path) -> Result<()> {
    let mut store = open_dictionary(dict)?;
    store.update_word(args.word_id, &args.lomaji, args.hanji.as_deref())?;
    save_dictionary(dict, &store)?;
    println!("Updated word {}: {}", args.word_id, args.lomaji);
    Ok(())
}

fn run_remove(args: RemoveArgs, dict: &std::path::Path) -> Result<()> {
    let mut store = open_dictionary(dict)?;
    store.delete_word(args.word_id)?;
    save_dictionary(dict, &store)?;
    println!("Removed word {}", args.word_id);
    Ok(())
}

fn run_list(dict: &std::path::Path, json: bool) -> Result<()> {
    let store = open_dictionary(dict)?;
    if json {
        return print_json(&serde_json::to_value(store.words())?);
    }
    log::info!(
        "{} word(s), {} syllable(s)",
        store.words().len(),
        store.syllables().len()
    );
    print_words(store.words());
    Ok(())
}

fn run_finals(args: FinalsArgs, dict: &std::path::Path, json: bool) -> Result<()> {
    let store = open_dictionary(dict)?;
    let mut usage = store.final_usage();
    if let Some(lomaji) = &args.lomaji {
        let Some(wanted) = find_final(lomaji) else {
            bail!("No rhyme final {:?}", lomaji);
        };
        usage.retain(|u| u.rhyme_final.id == wanted.id);
    }
    if json {
        return print_json(&serde_json::to_value(&usage)?);
    }
    for u in &usage {
        let f = u.rhyme_final;
        println!(
            "{:>3}  {:<6} {}\tvowel={} coda={} nasal={} syllables={}",
            f.id,
            f.lomaji,
            f.hanji.unwrap_or(" "),
            f.vowel,
            f.coda.as_deref().unwrap_or("-"),
            f.nasal,
            u.data_count
        );
    }
    Ok(())
}
