//! Interactive stdin prompts, used when neither `--params` nor `--random` is
//! given.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Where the five model parameters come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamSource {
    File(PathBuf),
    Random,
}

pub struct Prompter<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `file` or `random`; for `file`, also ask for the path.
    pub fn param_source(&mut self) -> Result<ParamSource> {
        let answer = self.ask("Load parameters from a file or generate randomly? (file/random): ")?;
        match answer.to_lowercase().as_str() {
            "file" => {
                let path = self.ask("Enter the file path: ")?;
                Ok(ParamSource::File(PathBuf::from(path)))
            }
            "random" => Ok(ParamSource::Random),
            _ => bail!("Invalid input. Please choose 'file' or 'random'."),
        }
    }

    pub fn max_iterations(&mut self) -> Result<u64> {
        let answer = self.ask("Enter maximum iterations: ")?;
        answer
            .parse()
            .with_context(|| format!("invalid maximum iterations {answer:?}"))
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for an answer");
        }
        Ok(line.trim().to_owned())
    }
}
