// SPDX-License-Identifier: MPL-2.0
//! Tabbed grid inspector model.
//!
//! Auto-generates one inspector page per registered data-packet type: a tab
//! title, a prettified label per field, and the latest formatted values.
//! The host toolkit renders the pages; this model owns the data.
//!
//! # Design
//!
//! Instead of compile-time field reflection, each packet type carries an
//! explicit field-descriptor list (name plus accessor) through the
//! [`Inspect`] trait. Types are registered once at construction through the
//! builder; `set` looks the page up by `TypeId` and marshals the formatted
//! values to the UI thread through the injected dispatcher.
//!
//! Setting a packet type that was never registered is a build-time mismatch,
//! not a runtime condition: it panics immediately and is never retried.

pub mod labels;

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::dispatch::UiDispatcher;

/// One field of a packet: its identifier and how to format its value.
pub struct FieldDescriptor<P> {
    pub name: &'static str,
    pub get: fn(&P) -> String,
}

/// A packet type that can be shown on an inspector page.
pub trait Inspect: 'static {
    /// The field-descriptor list, in display order.
    fn fields() -> &'static [FieldDescriptor<Self>]
    where
        Self: Sized;

    /// The page title. Defaults to the prettified type name.
    #[must_use]
    fn title() -> String
    where
        Self: Sized,
    {
        labels::page_title(std::any::type_name::<Self>())
    }
}

/// One inspector tab: title, field labels, and the latest values.
#[derive(Debug, Clone)]
pub struct PageModel {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<String>,
}

/// Registers packet types and builds the inspector.
#[derive(Default)]
pub struct GridInspectorBuilder {
    pages: Vec<PageModel>,
    index: HashMap<TypeId, usize>,
}

impl GridInspectorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a packet type; its page appears in registration order.
    ///
    /// # Panics
    ///
    /// Panics when the type is registered twice — a configuration error.
    #[must_use]
    pub fn register<P: Inspect>(mut self) -> Self {
        let previous = self.index.insert(TypeId::of::<P>(), self.pages.len());
        assert!(
            previous.is_none(),
            "packet type {} registered twice",
            std::any::type_name::<P>()
        );

        let field_labels: Vec<String> = P::fields()
            .iter()
            .map(|field| labels::field_label(field.name))
            .collect();
        let values = vec![String::new(); field_labels.len()];

        self.pages.push(PageModel {
            title: P::title(),
            labels: field_labels,
            values,
        });
        self
    }

    #[must_use]
    pub fn build(self, dispatcher: Arc<dyn UiDispatcher>) -> GridInspector {
        GridInspector {
            pages: Arc::new(Mutex::new(self.pages)),
            index: self.index,
            dispatcher,
        }
    }
}

/// The inspector model: pages are read by the host on repaint, values are
/// written through [`set`](Self::set) from any thread.
pub struct GridInspector {
    pages: Arc<Mutex<Vec<PageModel>>>,
    index: HashMap<TypeId, usize>,
    dispatcher: Arc<dyn UiDispatcher>,
}

impl GridInspector {
    /// Formats `packet`'s fields and marshals them onto its page on the UI
    /// thread.
    ///
    /// # Panics
    ///
    /// Panics when `P` was never registered with the builder.
    pub fn set<P: Inspect>(&self, packet: &P) {
        let page = match self.index.get(&TypeId::of::<P>()) {
            Some(&page) => page,
            None => panic!(
                "packet type {} is not registered with this inspector",
                std::any::type_name::<P>()
            ),
        };

        let values: Vec<String> = P::fields().iter().map(|field| (field.get)(packet)).collect();
        tracing::trace!(page, ?values, "grid values queued");

        let pages = Arc::clone(&self.pages);
        self.dispatcher.post(Box::new(move || {
            pages.lock().expect("grid pages poisoned")[page].values = values;
        }));
    }

    /// A copy of the current pages, for the host's repaint.
    #[must_use]
    pub fn pages(&self) -> Vec<PageModel> {
        self.pages.lock().expect("grid pages poisoned").clone()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.index.len()
    }
}
