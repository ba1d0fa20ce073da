use clap::Parser;
use ecocampus::{core::analysis::Analysis, prelude::*};
use enumset::EnumSet;

use crate::{
    cli::{
        OutputFormat,
        parameters::{ScoringArgs, SolarParametersArgs},
        usage::UsageArgs,
    },
    tables::{
        build_annual_impact_table,
        build_consumption_table,
        build_projection_table,
        build_score_table,
        build_solar_table,
        build_tips_table,
    },
};

const PROJECTION_YEARS: u32 = 10;

#[derive(Parser)]
pub struct AnalyzeArgs {
    #[clap(flatten)]
    usage: UsageArgs,

    #[clap(flatten)]
    scoring: ScoringArgs,

    #[clap(flatten)]
    solar: SolarParametersArgs,

    /// Report sections to render.
    #[clap(
        long = "sections",
        env = "SECTIONS",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "analysis,consumption,solar,roadmap",
    )]
    sections: Vec<Section>,

    #[clap(long, value_enum, default_value = "table", env = "OUTPUT_FORMAT")]
    format: OutputFormat,
}

#[derive(Debug, clap::ValueEnum, enumset::EnumSetType)]
pub enum Section {
    /// Efficiency score, waste, emission, and the eco status.
    Analysis,

    /// Monthly consumption breakdown by appliance group.
    Consumption,

    /// Solar system sizing, payoff, and the 10-year projection.
    Solar,

    /// Improvement tips.
    Roadmap,
}

impl AnalyzeArgs {
    fn sections(&self) -> EnumSet<Section> {
        self.sections.iter().copied().collect()
    }

    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let usage = self.usage.load()?;
        info!(usage.rooms, %usage.monthly_bill, %usage.campus_size, "analyzing…");
        let analysis = Analysis::run(&usage, self.scoring.into(), self.solar.into());
        info!(
            %analysis.score.final_score,
            %analysis.waste,
            %analysis.eco_status,
            n_tips = analysis.tips.len(),
            "analyzed",
        );

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            }
            OutputFormat::Table => {
                for section in self.sections() {
                    render(section, &analysis);
                }
            }
        }
        Ok(())
    }
}

fn render(section: Section, analysis: &Analysis) {
    match section {
        Section::Analysis => {
            println!("{}", build_score_table(analysis));
            println!("{}", build_annual_impact_table(&analysis.annual_impact));
        }
        Section::Consumption => match build_consumption_table(&analysis.consumption) {
            Some(table) => println!("{table}"),
            None => warn!("enter the electricity usage to see the consumption breakdown"),
        },
        Section::Solar => {
            println!("{}", build_solar_table(&analysis.solar));
            println!("{}", build_projection_table(&analysis.solar, PROJECTION_YEARS));
        }
        Section::Roadmap => {
            println!("{}", build_tips_table(&analysis.tips));
        }
    }
}
