//! Poll loop
//!
//! Drives the fetch/observe/notify cycle until every tracked machine has
//! finished, then sends a final "All Done" message and returns. The loop
//! moves through three states: running while the watch set is non-empty,
//! draining once a cycle empties it (final notification pending), and
//! terminated. Ctrl-C aborts whatever the loop is doing and maps to a
//! clean exit.

use std::time::Duration;

use tracing::{debug, trace};

use crate::client::MieleClient;
use crate::error::Result;
use crate::notify::{DEFAULT_TITLE, Pushover};
use crate::util::print_status;
use crate::watch::WatchSet;

pub struct Monitor {
    client: MieleClient,
    notifier: Pushover,
    watch: WatchSet,
    interval: Duration,
}

impl Monitor {
    pub fn new(
        client: MieleClient,
        notifier: Pushover,
        watch: WatchSet,
        interval: Duration,
    ) -> Self {
        Self {
            client,
            notifier,
            watch,
            interval,
        }
    }

    /// Run poll cycles until the watch set is empty.
    ///
    /// Returns after the final notification went out, or immediately on
    /// Ctrl-C. The signal also cancels an in-flight request or sleep.
    pub async fn run(mut self) -> Result<()> {
        debug!(
            "starting poll loop for {} machine(s), interval {:?}",
            self.watch.len(),
            self.interval
        );

        tokio::select! {
            result = self.poll_loop() => result,
            _ = tokio::signal::ctrl_c() => {
                print_status("SIGINT received. Exiting..");
                Ok(())
            }
        }
    }

    async fn poll_loop(&mut self) -> Result<()> {
        loop {
            self.cycle().await?;

            if self.watch.is_empty() {
                debug!("watch set drained, sending final notification");
                self.notifier.notify("All Done", DEFAULT_TITLE).await?;
                print_status("All Done");
                return Ok(());
            }

            trace!("sleeping {:?} until next cycle", self.interval);
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One fetch-compare-notify pass. Notifications go out one per
    /// finished machine, immediately, in record order.
    async fn cycle(&mut self) -> Result<()> {
        let machines = self.client.fetch_machines().await?;

        for event in self.watch.observe(&machines) {
            let msg = format!("{} {} is now finished!", event.kind, event.id);
            print_status(&msg);
            self.notifier.notify(&msg, DEFAULT_TITLE).await?;
        }

        Ok(())
    }
}
