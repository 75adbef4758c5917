//! Order processor pipeline.

use tracing::debug;

use custopt_core::DomainResult;

use crate::order::Order;

/// One step of order recalculation (customer options, shipping, taxes, ...).
///
/// Processors mutate the order in place and must not perform IO. An error
/// aborts the pipeline; the order may then be partially processed and should
/// be discarded or reprocessed by the caller.
pub trait OrderProcessor: Send + Sync {
    fn process(&self, order: &mut Order) -> DomainResult<()>;
}

impl<P: OrderProcessor + ?Sized> OrderProcessor for Box<P> {
    fn process(&self, order: &mut Order) -> DomainResult<()> {
        (**self).process(order)
    }
}

struct Registered {
    name: &'static str,
    priority: i32,
    processor: Box<dyn OrderProcessor>,
}

/// Runs registered processors by descending priority; ties keep
/// registration order.
#[derive(Default)]
pub struct CompositeOrderProcessor {
    processors: Vec<Registered>,
}

impl CompositeOrderProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: &'static str,
        priority: i32,
        processor: impl OrderProcessor + 'static,
    ) {
        self.processors.push(Registered {
            name,
            priority,
            processor: Box::new(processor),
        });
        // Stable sort keeps registration order for equal priorities.
        self.processors.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    pub fn with(
        mut self,
        name: &'static str,
        priority: i32,
        processor: impl OrderProcessor + 'static,
    ) -> Self {
        self.register(name, priority, processor);
        self
    }

    /// Processor names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name).collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl OrderProcessor for CompositeOrderProcessor {
    fn process(&self, order: &mut Order) -> DomainResult<()> {
        for registered in &self.processors {
            debug!(
                order_id = %order.id_typed(),
                processor = registered.name,
                priority = registered.priority,
                "running order processor"
            );
            registered.processor.process(order)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for CompositeOrderProcessor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CompositeOrderProcessor")
            .field("processors", &self.names())
            .finish()
    }
}

/// Removes adjustments of the given kinds everywhere in the order.
///
/// Registered ahead of processors that rebuild those adjustments from
/// scratch.
#[derive(Debug, Clone, Default)]
pub struct AdjustmentsClearer {
    kinds: Vec<String>,
}

impl AdjustmentsClearer {
    pub fn new<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }
}

impl OrderProcessor for AdjustmentsClearer {
    fn process(&self, order: &mut Order) -> DomainResult<()> {
        for kind in &self.kinds {
            order.remove_adjustments_recursively(kind);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use custopt_core::{DomainError, Money, OrderId};

    use crate::adjustment::{AdjustmentFactory, DefaultAdjustmentFactory};

    struct Recording {
        label: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    }

    impl OrderProcessor for Recording {
        fn process(&self, _order: &mut Order) -> DomainResult<()> {
            self.log.lock().unwrap().push(self.label);
            if self.fail {
                return Err(DomainError::invariant(self.label));
            }
            Ok(())
        }
    }

    fn recording(
        label: &'static str,
        log: &Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    ) -> Recording {
        Recording {
            label,
            log: log.clone(),
            fail,
        }
    }

    fn test_order() -> Order {
        Order::new(OrderId::new(), "EUR", Utc::now())
    }

    #[test]
    fn runs_by_descending_priority_keeping_ties_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let pipeline = CompositeOrderProcessor::new()
            .with("low", 0, recording("low", &log, false))
            .with("high", 50, recording("high", &log, false))
            .with("mid_a", 10, recording("mid_a", &log, false))
            .with("mid_b", 10, recording("mid_b", &log, false));

        pipeline.process(&mut test_order()).unwrap();

        assert_eq!(pipeline.names(), vec!["high", "mid_a", "mid_b", "low"]);
        assert_eq!(*log.lock().unwrap(), vec!["high", "mid_a", "mid_b", "low"]);
    }

    #[test]
    fn first_error_stops_the_pipeline() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let pipeline = CompositeOrderProcessor::new()
            .with("first", 20, recording("first", &log, true))
            .with("second", 10, recording("second", &log, false));

        let err = pipeline.process(&mut test_order()).unwrap_err();

        assert_eq!(err, DomainError::invariant("first"));
        assert_eq!(*log.lock().unwrap(), vec!["first"]);
    }

    #[test]
    fn clearer_removes_only_listed_kinds() {
        let mut order = test_order();
        let factory = DefaultAdjustmentFactory;
        for (kind, amount) in [("shipping", 1), ("tax", 1), ("promotion", -1)] {
            order.add_adjustment(factory.create_with_data(
                kind,
                kind,
                Money::from_minor(amount),
                false,
            ));
        }

        AdjustmentsClearer::new(["shipping", "tax"])
            .process(&mut order)
            .unwrap();

        assert_eq!(order.adjustments().len(), 1);
        assert_eq!(order.adjustments()[0].kind(), "promotion");
    }
}
