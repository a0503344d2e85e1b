use anyhow::Result;

use crate::{
    config::load_build_info,
    domain::{
        decision::{select_delivery_mode, should_skip_posting, DeliveryMode},
        status::resolve_contextual_status,
    },
};

pub(crate) fn run() -> Result<()> {
    let build = load_build_info()?;
    let status = resolve_contextual_status(&build.build_status, &build.last_build_status);
    let mode = select_delivery_mode(&build)?;

    println!("job: {}", build.job_name);
    println!("status: {} ({})", status.text(), status.color().as_str());
    match mode {
        DeliveryMode::Channel { channel_id, .. } => {
            println!("delivery: channel (id={channel_id})");
        }
        DeliveryMode::Webhook { .. } => println!("delivery: webhook"),
    }
    println!("skip: {}", should_skip_posting(&build));
    Ok(())
}
