//! Tests for argument parsing and the interactive prompts.

#[cfg(test)]
mod args_tests {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::Args;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["schelling"]).unwrap();
        assert!(args.params.is_none());
        assert!(!args.random);
        assert_eq!(args.max_iterations, None);
        assert_eq!(args.snapshot_interval, 1);
        assert_eq!(args.pace_ms, 500);
        assert!(!args.render && !args.json && !args.sqlite);
    }

    #[test]
    fn full_flag_set() {
        let args = Args::try_parse_from([
            "schelling",
            "--params", "city.txt",
            "--max-iterations", "25",
            "--seed", "9",
            "--output-dir", "out",
            "--snapshot-interval", "5",
            "--render",
            "--pace-ms", "0",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.params, Some(PathBuf::from("city.txt")));
        assert_eq!(args.max_iterations, Some(25));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.snapshot_interval, 5);
        assert!(args.render && args.json);
    }

    #[test]
    fn params_and_random_conflict() {
        assert!(Args::try_parse_from(["schelling", "--params", "p.txt", "--random"]).is_err());
    }

    #[test]
    fn sqlite_needs_output_dir() {
        assert!(Args::try_parse_from(["schelling", "--random", "--sqlite"]).is_err());
        assert!(Args::try_parse_from(["schelling", "--random", "--sqlite", "--output-dir", "o"]).is_ok());
    }
}

#[cfg(test)]
mod prompt_tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use crate::prompt::{ParamSource, Prompter};

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn file_source_asks_for_path() {
        let mut p = prompter("file\n  city.txt \n");
        assert_eq!(p.param_source().unwrap(), ParamSource::File(PathBuf::from("city.txt")));
    }

    #[test]
    fn random_source_is_case_insensitive() {
        assert_eq!(prompter(" Random\n").param_source().unwrap(), ParamSource::Random);
    }

    #[test]
    fn other_answers_rejected() {
        let err = prompter("maybe\n").param_source().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input. Please choose 'file' or 'random'.");
    }

    #[test]
    fn closed_input_fails() {
        assert!(prompter("").param_source().is_err());
    }

    #[test]
    fn max_iterations_parsed() {
        assert_eq!(prompter("40\n").max_iterations().unwrap(), 40);
        assert!(prompter("forty\n").max_iterations().is_err());
        assert!(prompter("-1\n").max_iterations().is_err());
    }
}
