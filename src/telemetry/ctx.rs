use std::marker::PhantomData;
use tracing::{info, debug, warn, Span};

pub trait PhaseSpan {
    fn name(&self) -> &'static str;
    fn span(&self) -> Span;
}

pub trait OpMarker {
    const NAME: &'static str;
    type Phase: PhaseSpan;
    fn root_span() -> Span;
}

pub struct LogCtx<O: OpMarker> {
    pub(crate) json: bool,
    pub(crate) _marker: PhantomData<O>,
}

impl<O: OpMarker> LogCtx<O> {
    fn op_name(&self) -> &'static str { O::NAME }

    pub fn root_span_kv<'a, T>(&self, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = O::root_span();
        let details = kv_to_string(fields);
        if details.is_empty() {
            info!(op = %self.op_name(), "start");
        } else {
            info!(op = %self.op_name(), details = %details, "start");
        }
        span
    }

    pub fn span(&self, ph: &O::Phase) -> Span {
        let span = ph.span();
        debug!(op = %self.op_name(), phase = ph.name(), "span_start");
        span
    }

    pub fn warn(&self, msg: impl AsRef<str>) { if self.json { warn!(op = %self.op_name(), "{}", msg.as_ref()); } else { warn!("{}", msg.as_ref()); } }

    pub fn info_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        let details = kv_to_string(kv);
        if self.json { info!(op = %self.op_name(), details = %details, "{}", msg); }
        else { info!("{} {}", msg, details); }
    }
}

impl LogCtx<crate::telemetry::ops::digest::Digest> {
    pub fn fetched(&self, title: &str, items: usize) {
        if self.json { info!(op = %self.op_name(), playlist = %title, items, "fetched"); }
        else { info!("📥 Playlist \"{}\" — {} items fetched", title, items); }
    }

    pub fn filtered(&self, kept: usize, dropped: usize) {
        if self.json { info!(op = %self.op_name(), kept, dropped, "filtered"); }
        else { info!("🧹 Filter — kept={} dropped={}", kept, dropped); }
    }
}

fn kv_to_string<'a, T>(kv: T) -> String
where
    T: IntoIterator<Item = (&'a str, String)>,
{
    let mut parts: Vec<String> = Vec::new();
    for (k, v) in kv { parts.push(format!("{}={}", k, v)); }
    parts.join(" ")
}
