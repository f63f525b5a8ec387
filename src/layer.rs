use crate::error::HandleError;
use crate::handler::Handler;
use crate::level::Level;
use crate::record::{Attr, LogRecord, Value};
use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::span;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::{LookupSpan, SpanRef};

/// `tracing_subscriber` layer that turns events into [`LogRecord`]s and
/// hands them to a [`Handler`].
///
/// Span fields become bound attributes: every new span stores a handler
/// derived from its parent's (or the root handler) with the span's fields
/// appended, and events are rendered through the handler of the span they
/// occur in. Context attributes therefore always precede the event's own.
pub struct PrettyLayer<H> {
    root: H,
}

/// Per-span handler kept in the span's extensions.
struct SpanHandler<H>(H);

impl<H: Handler> PrettyLayer<H> {
    pub fn new(root: H) -> Self {
        PrettyLayer { root }
    }

    /// Handler used for events outside of any span.
    pub fn handler(&self) -> &H {
        &self.root
    }

    fn derive_for_parent<S>(&self, parent: Option<SpanRef<'_, S>>, attrs: &[Attr]) -> H
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        match parent.as_ref().and_then(span_handler::<S, H>) {
            Some(handler) => handler.with_attrs(attrs),
            None => self.root.with_attrs(attrs),
        }
    }

    fn handle_in<S>(&self, span: Option<SpanRef<'_, S>>, record: &LogRecord) -> Result<(), HandleError>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        // The extensions guard is released before the sink is touched, so
        // sinks may record onto the span they are writing for.
        match span.as_ref().and_then(span_handler::<S, H>) {
            Some(handler) => handler.handle(record),
            None => self.root.handle(record),
        }
    }
}

fn span_handler<S, H>(span: &SpanRef<'_, S>) -> Option<H>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    H: Handler,
{
    let extensions = span.extensions();
    extensions.get::<SpanHandler<H>>().map(|handler| handler.0.clone())
}

impl<S, H> Layer<S> for PrettyLayer<H>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    H: Handler,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Spans always pass so their fields reach events below them.
        !metadata.is_event() || self.root.enabled(Level::from(*metadata.level()))
    }

    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };

        let mut visitor = FieldVisitor::new(false);
        attrs.record(&mut visitor);

        let handler = self.derive_for_parent(span.parent(), &visitor.attrs);
        span.extensions_mut().insert(SpanHandler(handler));
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };

        let mut visitor = FieldVisitor::new(false);
        values.record(&mut visitor);
        if visitor.attrs.is_empty() {
            return;
        }

        let mut extensions = span.extensions_mut();
        if let Some(slot) = extensions.get_mut::<SpanHandler<H>>() {
            slot.0 = slot.0.with_attrs(&visitor.attrs);
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let level = Level::from(*event.metadata().level());
        if !self.root.enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::new(true);
        event.record(&mut visitor);

        let record = LogRecord {
            time: Local::now().fixed_offset(),
            level,
            message: visitor.message.unwrap_or_default(),
            attributes: visitor.attrs,
        };

        // Reporting through `tracing` would re-enter this layer.
        if let Err(e) = self.handle_in(ctx.event_span(event), &record) {
            eprintln!("{}", e);
        }
    }
}

/// Collects `tracing` fields into ordered attributes, optionally pulling
/// out the `message` field.
pub struct FieldVisitor {
    pub attrs: Vec<Attr>,
    pub message: Option<String>,
    capture_message: bool,
}

impl FieldVisitor {
    pub fn new(capture_message: bool) -> Self {
        FieldVisitor {
            attrs: Vec::new(),
            message: None,
            capture_message,
        }
    }

    fn push(&mut self, field: &Field, value: Value) {
        if self.capture_message && field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.attrs.push(Attr::new(field.name(), value));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field, Value::Str(format!("{:?}", value)));
    }
}
