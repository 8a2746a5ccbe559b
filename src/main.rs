use gnomon::application::{resolve_today, Calendar};
use gnomon::config::CalendarConfig;
use gnomon::message::{Message, View};

/// Demo host: build the component, resolve the startup clock, and dump the
/// render tree for the requested view.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalendarConfig::load_or_default(&CalendarConfig::default_path());

    // Log to the systemd user journal (`journalctl --user -t gnomon -f`).
    // Wrapper filters: gnomon at info/debug (per config), everything else at warn.
    if let Ok(journal) = systemd_journal_logger::JournalLog::new() {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                if metadata.target().starts_with("gnomon") {
                    let max = if gnomon::debug_logging() {
                        log::LevelFilter::Debug
                    } else {
                        log::LevelFilter::Info
                    };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = journal.with_syslog_identifier("gnomon".to_string());
        gnomon::set_debug_logging(config.debug_logging);
        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal }))?;
        // Global max must be Debug so gnomon debug logs can pass through when toggled.
        log::set_max_level(log::LevelFilter::Debug);
    }

    let mut calendar = Calendar::new(&config);

    // CLI flag overrides the configured startup view.
    let args: Vec<String> = std::env::args().collect();
    let view = args.iter().position(|a| a == "--view").and_then(|i| {
        args.get(i + 1).and_then(|v| match v.as_str() {
            "year" => Some(View::Year),
            "month" => Some(View::Month),
            "week" => Some(View::Week),
            "day" => Some(View::Day),
            _ => None,
        })
    });
    if let Some(view) = view {
        calendar.update(Message::SetView(view));
    }

    // The one async boundary: the calendar shows the epoch placeholder until
    // the clock resolution lands.
    let init = resolve_today().await;
    calendar.update(init);

    print!("{}", calendar.view());
    Ok(())
}
