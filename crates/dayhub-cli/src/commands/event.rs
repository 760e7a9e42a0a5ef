//! Calendar event management commands.

use chrono::NaiveDate;
use clap::Subcommand;
use dayhub_core::model::CalendarEvent;
use dayhub_core::store::{Config, Store};

#[derive(Subcommand)]
pub enum EventAction {
    /// Add a calendar event
    Add {
        /// Event title
        title: String,
        /// Calendar day (YYYY-MM-DD)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: NaiveDate,
        /// Start time of day (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        time: String,
        /// Who the event is with
        #[arg(long, default_value = "")]
        person: String,
        /// Meeting link
        #[arg(long, default_value = "")]
        link: String,
        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,
        /// Where the event happens
        #[arg(long, default_value = "")]
        location: String,
        /// Free-form notes
        #[arg(long, default_value = "")]
        description: String,
        /// Remind this many minutes before the event
        #[arg(long, value_name = "MINUTES")]
        remind_minutes: Option<i64>,
        /// Reminder sound: preset name (beep, chime, bell) or a URL/path
        #[arg(long)]
        sound: Option<String>,
    },
    /// List calendar events
    List {
        /// Only events in this month (YYYY-MM)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete a calendar event
    Delete {
        /// Event ID
        id: String,
    },
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut document = store.load()?;

    match action {
        EventAction::Add {
            title,
            date,
            time,
            person,
            link,
            phone,
            location,
            description,
            remind_minutes,
            sound,
        } => {
            dayhub_core::model::parse_time_of_day(&time)?;
            let mut event = CalendarEvent::new(title, date, time);
            event.person = person;
            event.link = link;
            event.phone = phone;
            event.location = location;
            event.description = description;
            if let Some(minutes) = remind_minutes {
                event.remind_me = true;
                event.reminder_minutes = Some(minutes);
                event.sound = sound.as_deref().map(Config::resolve_sound);
            }
            println!("Event created: {}", event.id);
            document.events.push(event);
            store.save(&document)?;
        }
        EventAction::List { month, json } => {
            let events: Vec<CalendarEvent> = document
                .events
                .into_iter()
                .filter(|e| match &month {
                    Some(m) => e.date.format("%Y-%m").to_string() == *m,
                    None => true,
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                for event in &events {
                    let origin = if event.is_external { "external" } else { "local" };
                    let mut extras = Vec::new();
                    if !event.location.is_empty() {
                        extras.push(event.location.clone());
                    }
                    if !event.person.is_empty() {
                        extras.push(event.person.clone());
                    }
                    let details = if extras.is_empty() {
                        String::new()
                    } else {
                        format!("  ({})", extras.join(", "))
                    };
                    println!(
                        "{} {} {}  {}  [{origin}]{details}",
                        event.date, event.time, event.id, event.title
                    );
                }
            }
        }
        EventAction::Delete { id } => {
            let before = document.events.len();
            document.events.retain(|e| e.id != id);
            if document.events.len() == before {
                return Err(format!("no event with id {id}").into());
            }
            store.save(&document)?;
            println!("Event deleted: {id}");
        }
    }

    Ok(())
}
