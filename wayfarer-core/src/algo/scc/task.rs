use crate::NodeId;

/// The stages a node passes through during the iterative Tarjan
/// traversal. Together they encode the recursion frame of the textbook
/// algorithm: index assignment, successor expansion, lowlink folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TarjanStep {
    Index,
    GetSuccessors,
    SetLowlink,
}

/// One frame of the explicit Tarjan task deque.
///
/// A fresh element starts at [`TarjanStep::Index`] and advances through
/// the steps in order; once finished it stays finished.
#[derive(Debug, Clone)]
pub struct TarjanTaskElement {
    node: NodeId,
    predecessor: Option<NodeId>,
    step: Option<TarjanStep>,
}

impl TarjanTaskElement {
    pub fn new(node: NodeId, predecessor: Option<NodeId>) -> Self {
        Self {
            node,
            predecessor,
            step: Some(TarjanStep::Index),
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    /// Current step, `None` once the element is finished.
    pub fn current_step(&self) -> Option<TarjanStep> {
        self.step
    }

    /// Moves on to the next step.
    pub fn advance(&mut self) {
        self.step = match self.step {
            Some(TarjanStep::Index) => Some(TarjanStep::GetSuccessors),
            Some(TarjanStep::GetSuccessors) => Some(TarjanStep::SetLowlink),
            Some(TarjanStep::SetLowlink) | None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_walks_the_steps_in_order() {
        let mut element = TarjanTaskElement::new(1, Some(2));
        assert_eq!(element.current_step(), Some(TarjanStep::Index));
        element.advance();
        assert_eq!(element.current_step(), Some(TarjanStep::GetSuccessors));
        element.advance();
        assert_eq!(element.current_step(), Some(TarjanStep::SetLowlink));
        element.advance();
        assert_eq!(element.current_step(), None);
    }

    #[test]
    fn finished_elements_stay_finished() {
        let mut element = TarjanTaskElement::new(1, None);
        for _ in 0..3 {
            element.advance();
        }
        assert_eq!(element.current_step(), None);
        element.advance();
        assert_eq!(element.current_step(), None);
    }

    #[test]
    fn element_carries_node_and_predecessor() {
        let element = TarjanTaskElement::new(1, Some(2));
        assert_eq!(element.node(), 1);
        assert_eq!(element.predecessor(), Some(2));
        assert_eq!(TarjanTaskElement::new(3, None).predecessor(), None);
    }
}
