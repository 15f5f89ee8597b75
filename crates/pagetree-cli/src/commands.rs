use std::io::Write;
use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use pagetree_core::vfs::PhysicalFileSystem;
use pagetree_core::{load_pages, render_rows, Page, PageList, PageTreeConfig};

use crate::{Cli, Command, RemoveArgs, ShowArgs};

/// Execute the parsed command, writing rows to `out`
pub fn run(cli: &Cli, config: &PageTreeConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    match &cli.command {
        Command::Show(args) => show(args, config, out),
        Command::Remove(args) => remove(args, config, out),
    }
}

fn show(args: &ShowArgs, config: &PageTreeConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let list = load_list(&args.file, config)?;
    print_list(&list, args.json, config, out)
}

fn remove(args: &RemoveArgs, config: &PageTreeConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut list = load_list(&args.file, config)?;

    match usize::try_from(args.at) {
        Ok(at) => {
            let removed = list.remove_subtree(at);
            info!("removed {} pages starting at position {}", removed.len(), at);
        }
        Err(_) => debug!("negative position {}, nothing removed", args.at),
    }

    print_list(&list, args.json, config, out)
}

/// Load, optionally resolve visible roots, and flatten
fn load_list(path: &Path, config: &PageTreeConfig) -> anyhow::Result<PageList<Page>> {
    let pages = load_pages(path, &PhysicalFileSystem)
        .with_context(|| format!("loading pages from {}", path.display()))?;
    let loaded = pages.len();

    let mut list = PageList::new(pages);
    if config.loading.resolve_visible_roots {
        list.resolve_visible_roots();
    }

    let list = list.flatten();
    if list.len() < loaded {
        info!(
            "{} of {} pages are not reachable from a top-level page",
            loaded - list.len(),
            loaded
        );
    }
    Ok(list)
}

fn print_list(
    list: &PageList<Page>,
    json: bool,
    config: &PageTreeConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let indexes = list.annotate();

    if json {
        serde_json::to_writer_pretty(&mut *out, &list.rows(&indexes))?;
        writeln!(out)?;
        return Ok(());
    }

    for line in render_rows(list, &indexes, &config.display) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
