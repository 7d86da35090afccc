use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, warn};
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rs_palabra_solver::*;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;

mod word_list;

/// The most guesses a self-played game may take before it counts as lost.
const MAX_SELF_PLAY_GUESSES: u32 = 128;

/// Suggests guesses for Spanish five-letter word games, picking the word whose feedback is expected
/// to reveal the most about the hidden word.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains the possible words, separated by whitespace.
    #[arg(short = 'f', long, default_value = "data/palabras.txt")]
    words_file: String,

    /// How to score candidate guesses.
    #[arg(short, long, value_enum, default_value_t = Strategy::Entropy)]
    strategy: Strategy,

    /// On the first round, only score this many words from the start of the word list. At least
    /// one word is always scored.
    #[arg(long, default_value_t = DEFAULT_FIRST_ROUND_POOL_SIZE)]
    pool_size: usize,

    /// Score every word on the first round. This can be slow for long word lists.
    #[arg(long, conflicts_with = "pool_size")]
    no_pool_cap: bool,

    /// Log the solver's reasoning. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    /// Maximize the expected information of each guess.
    Entropy,
    /// Prefer words whose letters appear in the most possible words.
    Frequency,
}

impl From<Strategy> for ScoringStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Entropy => ScoringStrategy::Entropy,
            Strategy::Frequency => ScoringStrategy::LetterFrequency,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game: the solver suggests words and you report how each one did.
    Interactive,
    /// Let the solver play a single game against the given word.
    Single {
        /// The word to guess.
        #[arg(required_unless_present = "random")]
        word: Option<String>,
        /// Pick the word to guess at random from the words file.
        #[arg(long, conflicts_with = "word")]
        random: bool,
    },
    /// Let the solver play against every word in the words file, and report how many guesses
    /// it needed.
    Benchmark,
    /// Add the five-letter upper-case entries of a dictionary to the words file.
    UpdateWords {
        /// Path to a dictionary file with one entry on each line.
        #[arg(short, long)]
        dictionary: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    debug!("{:?}", args);

    match &args.command {
        Command::Interactive => play_interactive_game(build_solver(&args)?)?,
        Command::Single { word, random } => {
            let solver = build_solver(&args)?;
            let objective = match word {
                Some(word) if !random => Word::new(word)?,
                _ => choose_random_word(solver.word_bank())?,
            };
            play_single_game(&objective, solver);
        }
        Command::Benchmark => run_benchmark(&build_solver(&args)?),
        Command::UpdateWords { dictionary } => {
            word_list::update_words(&args.words_file, dictionary)?
        }
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn build_solver(args: &Args) -> Result<Solver, Box<dyn Error>> {
    let mut words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(&mut words_reader)?;
    println!("There are {} possible words.", word_bank.len());

    let config = SolverConfig {
        strategy: args.strategy.into(),
        first_round_pool_size: if args.no_pool_cap {
            None
        } else {
            Some(args.pool_size)
        },
    };
    Ok(Solver::new(word_bank, config)?)
}

fn choose_random_word(word_bank: &WordBank) -> Result<Word, WordleError> {
    word_bank
        .choose(&mut rand::thread_rng())
        .copied()
        .ok_or(WordleError::EmptyWordList)
}

fn run_benchmark(solver: &Solver) {
    let results: Vec<GameResult> = solver
        .word_bank()
        .par_iter()
        .map(|objective| play_game(objective, MAX_SELF_PLAY_GUESSES, solver.clone()))
        .collect();

    let mut num_guesses_per_game: Vec<u32> = Vec::with_capacity(results.len());
    for (objective, result) in solver.word_bank().iter().zip(&results) {
        match result {
            GameResult::Success(guesses) => num_guesses_per_game.push(guesses.len() as u32),
            GameResult::Failure(guesses) => {
                warn!("Failed to solve {} after {} guesses.", objective, guesses.len())
            }
            GameResult::UnknownWord => warn!("Ran out of possible words for {}.", objective),
        }
    }
    println!("Benchmarking with {:?}.", solver.config());
    println!(
        "Solved {} of {} words. Results:",
        num_guesses_per_game.len(),
        results.len()
    );
    if num_guesses_per_game.is_empty() {
        return;
    }

    let mut num_games_per_round: BTreeMap<u32, u32> = BTreeMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_round, num_games) in num_games_per_round.iter() {
        println!("|{}|{}|", num_round, num_games);
    }

    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
}

fn play_single_game(objective: &Word, solver: Solver) {
    println!("Trying to guess {}.", objective);
    match play_game(objective, MAX_SELF_PLAY_GUESSES, solver) {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::UnknownWord => {
            eprintln!("Error: given word not in the word list.");
            std::process::exit(1);
        }
    }
}

/// What the player answered to a suggested guess.
enum Reply {
    Feedback(GuessResult),
    Reject,
    Quit,
}

fn play_interactive_game(mut solver: Solver) -> io::Result<()> {
    println!(
        "Choose a word from the word list, and I will try to guess it.\n\n\
         For each guess, enter the result of each letter as:\n\n\
           * 'v' (verde) = this letter is in the word and in the right location\n\
           * 'a' (amarillo) = this letter is in the word, but not in this location\n\
           * 'n' (negro) = this letter is not in the word\n\n\
         For example, if your word was \"perro\" and the guess was \"carro\", you would enter \
         \"nnvvv\". Enter 'c' if the game doesn't accept my guess, and I will suggest another.\n"
    );

    let mut round = 1;
    loop {
        let guess = match solver.select_next_guess() {
            Some(guess) => guess,
            None => {
                println!("No possible words match those results.");
                return Ok(());
            }
        };
        println!(
            "Guess {}: I suggest {}. How did I do?",
            round,
            guess.to_string().to_uppercase()
        );

        match read_reply(&guess)? {
            Reply::Feedback(result) if result.is_solved() => {
                println!("I did it! It took me {} guesses.", round);
                return Ok(());
            }
            Reply::Feedback(result) => {
                solver.update(&result);
                round += 1;
            }
            Reply::Reject => solver.reject_guess(&guess),
            Reply::Quit => return Ok(()),
        }
    }
}

/// Reads replies until one is valid. Invalid feedback is reported, and doesn't change anything.
fn read_reply(guess: &Word) -> io::Result<Reply> {
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer)? == 0 {
            return Ok(Reply::Quit);
        }
        let input = buffer.trim();
        if input.eq_ignore_ascii_case("c") {
            return Ok(Reply::Reject);
        }
        match GuessResult::parse(*guess, input) {
            Ok(result) => return Ok(Reply::Feedback(result)),
            Err(err) => println!("{}. Try again.", err),
        }
    }
}
