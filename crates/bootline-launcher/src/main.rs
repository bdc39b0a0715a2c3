mod config;
mod hosted;

use std::{env, process};

use tracing::{debug, error, info, warn};

use bootline_core::{
    CommandLine, EntryTable, HomeLayout, Launcher, LoadingScope, StopError, request_stop,
    system_properties,
};
use bootline_model::PROP_CLASS_PATH;
use bootline_observe::{init_local_offset, init_logger};

use crate::config::LauncherConfig;

/// Exit status used when an interrupt cannot be delivered to the hosted program.
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> anyhow::Result<()> {
    // 0) local offset must be read while single-threaded
    init_local_offset();

    // 1) properties
    let cl = CommandLine::parse(env::args().skip(1))?;
    let props = system_properties();
    cl.apply(props);

    // 2) configuration + logger
    let cfg = LauncherConfig::load(props, HomeLayout::detect()?)?;
    init_logger(&cfg.logger)?;
    info!(
        home = %cfg.layout.home().display(),
        entry = %cfg.main_entry,
        "bootline starting"
    );

    // 3) class path
    cfg.layout.record(props);
    let resources = cfg.layout.assemble(cl.class_path())?;
    resources.append_to(props, PROP_CLASS_PATH);
    debug!(properties = ?props.snapshot(), "settings recorded");

    // 4) scopes: built-in programs live above the launcher scope
    let mut builtin = EntryTable::new();
    hosted::register(&mut builtin)?;
    let app = LoadingScope::builder("Bootline application")
        .with_entries(builtin)
        .build();
    let scope = LoadingScope::builder("Bootline launcher")
        .with_resources(resources)
        .with_parent(app)
        .build();
    info!(%scope, "scope ready");

    // 5) out-of-band stop path
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("bootline-stop")
        .enable_all()
        .build()?;
    runtime.spawn(stop_on_interrupt());

    // 6) launch
    let launcher = Launcher::new(scope, cfg.main_entry, cl.residual().to_vec());
    launcher.launch()?;

    runtime.shutdown_background();
    info!("bootline finished");
    Ok(())
}

async fn stop_on_interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for interrupts");
        return;
    }
    info!("interrupt received, stopping hosted program");

    match request_stop() {
        Ok(()) => info!("stop delivered"),
        Err(e @ (StopError::NotRunning | StopError::Unsupported(_))) => {
            warn!(error = %e, "hosted program cannot be stopped, exiting");
            process::exit(EXIT_INTERRUPTED);
        }
        Err(e) => error!(error = %e, "stop procedure failed"),
    }
}
