mod config;
mod session;

use storefront_sales::{SequentialPayLinks, UuidPayLinks};

use crate::config::{DemoConfig, PayLinkSource};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;
    storefront_observability::init(config.log_format);
    tracing::info!(?config, "starting storefront demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match config.pay_links {
        PayLinkSource::Uuid => session::run(&mut out, config.output, &mut UuidPayLinks),
        PayLinkSource::Sequential => {
            session::run(&mut out, config.output, &mut SequentialPayLinks::default())
        }
    }
}
