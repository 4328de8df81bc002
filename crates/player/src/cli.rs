//! Command-line presentation over a `PlayerSession`

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use kidsapp_domain::{
    Activity, ActivityDraft, ActivityId, ActivityQuery, AgeGroup, QueryTime, Setting, TimeOfDay,
};

use crate::application::Suggestion;
use crate::runner::PlayerSession;

#[derive(Parser, Debug)]
#[command(name = "kidsapp-player")]
#[command(version, about = "Activity suggestions for kids, managed by a parent")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the activities a child can be offered
    List {
        /// Include hidden activities and mark them
        #[arg(long)]
        all: bool,
    },

    /// Suggest a random activity for an age group, place and time
    Suggest {
        /// 2-4, 5-7 or 8-10
        age: Option<AgeGroup>,

        /// inomhus, utomhus or valfritt
        #[arg(value_name = "WHERE")]
        place: Option<Setting>,

        /// dag or kväll
        when: Option<QueryTime>,

        /// Activity currently shown; pick a different one
        #[arg(long = "not", value_name = "ID")]
        not: Option<String>,
    },

    /// Add a custom activity
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// One instruction; repeat for more steps
        #[arg(long = "step")]
        steps: Vec<String>,

        /// Age group; repeat for more
        #[arg(long = "age")]
        ages: Vec<AgeGroup>,

        #[arg(long = "where", default_value = "valfritt")]
        place: Setting,

        #[arg(long = "when", default_value = "valfritt")]
        time: TimeOfDay,

        #[arg(long)]
        minutes: Option<u32>,

        /// Needed material; repeat for more
        #[arg(long = "material")]
        materials: Vec<String>,
    },

    /// Delete a custom activity
    Delete { id: String },

    /// Hide an activity from the child
    Hide { id: String },

    /// Show a hidden activity again
    Show { id: String },

    /// Show the selected location, or select a new one
    Location { id: Option<String> },

    /// Manage the parent PIN
    Pin {
        #[command(subcommand)]
        action: PinAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum PinAction {
    Set { pin: String },
    Verify { pin: String },
    Clear,
}

fn write_activity(out: &mut impl Write, activity: &Activity, hidden: bool) -> Result<()> {
    let ages: Vec<&str> = activity.age_groups.iter().map(AgeGroup::as_str).collect();
    writeln!(
        out,
        "{}{}\t{}\t{}/{}\t{}",
        if hidden { "[dold] " } else { "" },
        activity.id,
        activity.title,
        activity.setting,
        activity.time_of_day,
        ages.join(",")
    )?;
    Ok(())
}

fn write_details(out: &mut impl Write, activity: &Activity) -> Result<()> {
    writeln!(out, "{} ({})", activity.title, activity.id)?;
    writeln!(out, "{}", activity.description)?;
    for (number, step) in activity.steps.iter().enumerate() {
        writeln!(out, "  {}. {}", number + 1, step)?;
    }
    if let Some(minutes) = activity.duration_minutes {
        writeln!(out, "Tid: ca {minutes} min")?;
    }
    if let Some(materials) = activity.materials.as_ref().filter(|m| !m.is_empty()) {
        writeln!(out, "Material: {}", materials.join(", "))?;
    }
    Ok(())
}

/// Run one command against the session, writing results to `out`.
pub fn execute(session: &mut PlayerSession, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::List { all: false } => {
            for activity in session.catalog.compose_catalog() {
                write_activity(out, &activity, false)?;
            }
        }
        Command::List { all: true } => {
            for entry in session.catalog.parent_view() {
                write_activity(out, entry.activity, entry.hidden)?;
            }
        }
        Command::Suggest {
            age,
            place,
            when,
            not,
        } => {
            let query = ActivityQuery::new(age, place, when);
            let catalog = session.catalog.compose_catalog();
            let suggestion = match not {
                Some(current) => {
                    session
                        .selection
                        .suggest_another(&catalog, &query, &ActivityId::new(current))
                }
                None => session.selection.suggest(&catalog, &query),
            };
            match suggestion {
                Suggestion::Picked(activity) => write_details(out, &activity)?,
                Suggestion::IncompleteQuery => {
                    writeln!(out, "Välj ålder, plats och tid först.")?
                }
                Suggestion::NoMatch => writeln!(out, "Ingen aktivitet passar just nu.")?,
                Suggestion::NothingElse => {
                    writeln!(out, "Det finns ingen annan aktivitet att byta till.")?
                }
            }
        }
        Command::Add {
            title,
            description,
            steps,
            ages,
            place,
            time,
            minutes,
            materials,
        } => {
            let mut draft = ActivityDraft::new(title, description, place, time)
                .with_steps(steps)
                .with_age_groups(ages);
            draft.duration_minutes = minutes;
            if !materials.is_empty() {
                draft.materials = Some(materials);
            }

            let id = session.platform.new_custom_activity_id();
            let created = session
                .catalog
                .create_from_draft(id, &draft)
                .context("Could not add activity")?;
            writeln!(out, "{}", created.id)?;
        }
        Command::Delete { id } => {
            session
                .catalog
                .delete_custom(&ActivityId::new(id))
                .context("Could not delete activity")?;
        }
        Command::Hide { id } => {
            session
                .catalog
                .set_hidden(&ActivityId::new(id), true)
                .context("Could not hide activity")?;
        }
        Command::Show { id } => {
            session
                .catalog
                .set_hidden(&ActivityId::new(id), false)
                .context("Could not show activity")?;
        }
        Command::Location { id: None } => {
            let location = session.locations.current_location();
            writeln!(out, "{}\t{}", location.id, location.name)?;
        }
        Command::Location { id: Some(id) } => {
            let location = session
                .locations
                .select_location(&id)
                .context("Could not select location")?;
            writeln!(out, "{}\t{}", location.id, location.name)?;
        }
        Command::Pin { action } => match action {
            PinAction::Set { pin } => {
                session.parent_gate.set_pin(&pin).context("Could not set PIN")?
            }
            PinAction::Verify { pin } => {
                let verdict = if session.parent_gate.verify_pin(&pin) {
                    "ok"
                } else {
                    "fel"
                };
                writeln!(out, "{verdict}")?;
            }
            PinAction::Clear => session.parent_gate.clear_pin(),
        },
    }
    Ok(())
}
