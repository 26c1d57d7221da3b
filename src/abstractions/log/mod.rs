/*!

# Overview

The `log` module provides logging with a numeric verbosity threshold on top of the log level. The log level describes
what _kind_ of message is logged, and the threshold describes how _verbose_ the logger must be for the message to be
emitted.

```
use dataenum::log::*;

// Only messages logged at threshold 1 or lower are emitted.
set_global_logging_threshold(1);

warning!(1, "Generating 2^17 sets to enumerate sort FSet(E)"); // Emitted
debug!(3, "Enumeration step on x: tree");                      // Not emitted
trace!(0, "Always emitted");                                   // Emitted
```

## Threshold

The global logging threshold is a number, with higher values meaning more verbose logging. It is the same for every
level. A message is emitted only if its threshold is _at most_ the global threshold. A message with threshold 0 (the
default when the threshold is omitted) is always emitted.

The enumerator uses the following conventions:

| threshold | used for                                                        |
|:----------|:----------------------------------------------------------------|
| 1         | large finite domains, refused or unsupported sorts              |
| 3         | session summaries (steps taken, values materialized)            |
| 5         | individual enumeration steps and accepted children              |

## Levels

Available levels are: Critical, Error, Warning, Info, Debug, Trace.

# Macros

```ignore
// With threshold
level!(threshold, "format string", args...);

// Without threshold (threshold 0, always emitted)
level!("format string");
```

The logging macros initialize the logger on first use; no explicit initialization is required. If the host
application has already installed a global `tracing` subscriber, that subscriber is used instead.

*/
mod formatter;
mod threshold_filter;
mod macros;

use std::sync::{
    atomic::{AtomicU8, Ordering},
    LazyLock
  };

use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::CustomFieldFormatter;
pub use macros::*;

/// Used for implicit initialization.
static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(CustomFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr),
      );

  // A subscriber installed by the host application takes precedence.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// This does not need to be called directly. Initializes the logging system.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(1); // Default threshold

/// Sets the global threshold. May be called before or after the logger is initialized.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_logging() {
    let sort = "FSet(Bool)";

    set_global_logging_threshold(3);

    info!(2, "Materialized 4 values of sort {}", sort);
    debug!(5, "NOT logged: step on {}", sort);
    warning!("Cannot enumerate elements of bag sort.");
    error!(5, "NOT logged: {}", sort);
    critical!(1, "Inconsistent solution for {}", sort);

    set_global_logging_threshold(5);
    debug!(5, "Logged after raising the threshold: {}", sort);

    assert_eq!(get_global_logging_threshold(), 5);
    set_global_logging_threshold(1);
  }
}
