use std::io::{self, Write};

use serde::Serialize;

use rodcut_solvers::rod_cutting::{CutPlan, Strategy};

/// One strategy's answer to a problem.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub strategy: Strategy,

    #[serde(flatten)]
    pub plan: CutPlan,
}

/// Everything printed for one problem.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub length: usize,
    pub prices: &'a [f64],
    pub outcomes: Vec<Outcome>,
}

impl Report<'_> {
    /// Returns true if every strategy produced the same plan.
    pub fn strategies_agree(&self) -> bool {
        self.outcomes
            .windows(2)
            .all(|pair| pair[0].plan == pair[1].plan)
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(name) = self.name {
            writeln!(out, "Test: {name}")?;
        }
        writeln!(out, "Rod length: {}", self.length)?;
        writeln!(out, "Prices: {:?}", self.prices)?;

        for outcome in &self.outcomes {
            let plan = &outcome.plan;
            writeln!(out)?;
            writeln!(out, "{} result:", outcome.strategy)?;
            writeln!(out, "  Maximum profit: {}", plan.max_profit())?;
            writeln!(out, "  Cuts: {:?}", plan.cuts())?;
            writeln!(out, "  Number of cuts: {}", plan.number_of_cuts())?;
        }

        if self.outcomes.len() > 1 {
            writeln!(out)?;
            if self.strategies_agree() {
                writeln!(out, "Strategies agree.")?;
            } else {
                writeln!(out, "Strategies DISAGREE.")?;
            }
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}
