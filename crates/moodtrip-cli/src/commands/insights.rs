use anyhow::Result;

use super::print_json;
use crate::context::AppContext;
use crate::render;

pub async fn run(context: &AppContext, category: Option<String>, clear: bool, json: bool) -> Result<()> {
    let service = context.insights_service(category)?;

    if clear {
        service.clear_history().await?;
        println!("Answer history cleared.");
        return Ok(());
    }

    let report = service.report().await?;
    if json {
        return print_json(&report);
    }
    print!("{}", render::insights(&report));
    Ok(())
}
