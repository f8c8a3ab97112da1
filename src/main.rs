mod app;
mod audio;
mod config;
mod editor;
mod interaction;
mod library;
mod paging;
mod panel;
mod playlist;
mod runtime;
mod theme;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
