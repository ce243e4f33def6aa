use anyhow::Result;
use moodtrip_core::place::PlaceId;
use moodtrip_core::preference::PreferenceKind;

use super::print_json;
use crate::context::AppContext;
use crate::render;

pub enum Action {
    Add(PlaceId),
    Remove(PlaceId),
    Toggle(PlaceId),
    List,
}

pub async fn run(context: &AppContext, kind: PreferenceKind, action: Action, json: bool) -> Result<()> {
    let service = context.saved_places_service()?;

    match action {
        Action::Add(id) => {
            service.mark(kind, id).await?;
            println!("Marked #{} as {}", id, kind);
        }
        Action::Remove(id) => {
            service.unmark(kind, id).await?;
            println!("Removed #{} from {}", id, kind);
        }
        Action::Toggle(id) => {
            if service.toggle(kind, id).await? {
                println!("Marked #{} as {}", id, kind);
            } else {
                println!("Removed #{} from {}", id, kind);
            }
        }
        Action::List => {
            let places = service.list(kind).await?;
            if json {
                return print_json(&places);
            }
            if places.is_empty() {
                println!("No {} places.", kind);
            }
            for place in &places {
                println!("{}", render::place_line(place));
            }
        }
    }
    Ok(())
}
