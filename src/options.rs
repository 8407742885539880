use std::num::ParseIntError;

const DEFAULT_GENERATIONS: usize = 10;
const DEFAULT_THREADS: usize = 1;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optopt("f", "file", "Life 1.06 input file (default: stdin)", "FILE");
        opts.optopt(
            "g",
            "generations",
            "number of generations to run (default: 10)",
            "COUNT",
        );
        opts.optopt("o", "output", "output file (default: stdout)", "FILE");
        opts.optopt(
            "t",
            "threads",
            "number of worker threads (default: 1)",
            "COUNT",
        );
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    /// Parses `args`, returning `Ok(None)` if only help was requested
    pub fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, getopts::Fail> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: sparselife [options] [FILE]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, getopts::Fail> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    pub fn generations(&self) -> Result<usize, ParseIntError> {
        self.matches
            .opt_get_default("generations", DEFAULT_GENERATIONS)
    }
    pub fn threads(&self) -> Result<usize, ParseIntError> {
        self.matches.opt_get_default("threads", DEFAULT_THREADS)
    }

    /// The input file, either from `--file` or the first free argument
    pub fn input_file(&self) -> Option<String> {
        self.matches
            .opt_str("file")
            .or_else(|| self.matches.free.first().cloned())
    }
    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Args {
        Args::new(args).unwrap().expect("not a help request")
    }

    #[test]
    fn defaults() {
        let args = args(&[]);

        assert_eq!(args.generations(), Ok(10));
        assert_eq!(args.threads(), Ok(1));
        assert_eq!(args.input_file(), None);
        assert_eq!(args.output_file(), None);
        assert_eq!(args.stats_file(), None);
    }

    #[test]
    fn generations_parses() {
        assert_eq!(args(&["-g", "0"]).generations(), Ok(0));
        assert_eq!(args(&["--generations", "250"]).generations(), Ok(250));
    }

    #[test]
    fn negative_generations_is_rejected() {
        assert!(args(&["--generations", "-1"]).generations().is_err());
        assert!(args(&["-g", "ten"]).generations().is_err());
    }

    #[test]
    fn input_file_from_flag_or_free_arg() {
        assert_eq!(
            args(&["--file", "glider.lif"]).input_file().as_deref(),
            Some("glider.lif")
        );
        assert_eq!(
            args(&["-g", "3", "glider.lif"]).input_file().as_deref(),
            Some("glider.lif")
        );
        assert_eq!(
            args(&["-f", "a.lif", "b.lif"]).input_file().as_deref(),
            Some("a.lif")
        );
    }

    #[test]
    fn output_and_stats_files() {
        let args = args(&["-o", "out.lif", "--stats", "stats.csv", "-t", "4"]);

        assert_eq!(args.output_file().as_deref(), Some("out.lif"));
        assert_eq!(args.stats_file().as_deref(), Some("stats.csv"));
        assert_eq!(args.threads(), Ok(4));
    }

    #[test]
    fn unknown_option_fails() {
        assert!(Args::new(&["--width", "3"]).is_err());
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).unwrap().is_none());
    }
}
