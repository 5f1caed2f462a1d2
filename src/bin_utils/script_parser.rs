use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScriptAction {
    Open,
    Deposit,
    Withdraw,
    Check,
}

/// One row of a self-test script. `amount` is kept as text so it goes
/// through the same validation as interactive input.
#[derive(Debug, Deserialize)]
pub struct ScriptStep {
    pub account: String,
    pub action: ScriptAction,
    pub amount: String,
}

/// Parses a self-test script in CSV format, yielding each step with its line number.
pub struct CsvScriptParser<R> {
    iter: DeserializeRecordsIntoIter<R, ScriptStep>,
}

impl<R> CsvScriptParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvScriptParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<ScriptStep>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
