//! Constraint and ConstraintSide rendering.
//!
//! A relation renders as `NAME(left)` or `NAME(left, right)`; nested
//! relations recurse through the side renderer.

use graphdoc_constraint::{ConstraintExpr, Operand};
use tracing::trace;

use crate::class;
use crate::error::{RenderError, RenderResult};
use crate::fragment::Fragment;
use crate::renderer::DocRenderer;

impl DocRenderer {
    /// Render one relation.
    pub fn constraint(&self, expr: &ConstraintExpr) -> RenderResult<Fragment> {
        self.constraint_at(expr, 1)
    }

    /// Render one side of a relation. An absent side renders nothing.
    pub fn constraint_side(&self, side: Option<&Operand>) -> RenderResult<Fragment> {
        self.constraint_side_at(side, 1)
    }

    fn constraint_at(&self, expr: &ConstraintExpr, depth: usize) -> RenderResult<Fragment> {
        let max = self.config.max_constraint_depth;
        if depth > max {
            return Err(RenderError::DepthExceeded { max });
        }
        if expr.name.is_empty() {
            return Err(RenderError::MissingInput("constraint name"));
        }
        trace!(name = %expr.name, depth, "rendering constraint");

        let mut children = vec![
            Fragment::inline(Some(class::CONSTRAINT_NAME), vec![Fragment::text(&expr.name)]),
            Fragment::text("("),
            self.constraint_side_at(Some(&expr.left_side), depth)?,
        ];
        if let Some(right) = &expr.right_side {
            children.push(Fragment::text(", "));
            children.push(self.constraint_side_at(Some(right), depth)?);
        }
        children.push(Fragment::text(")"));

        Ok(Fragment::inline(Some(class::CONSTRAINT), children))
    }

    fn constraint_side_at(&self, side: Option<&Operand>, depth: usize) -> RenderResult<Fragment> {
        let inner = match side {
            None => return Ok(Fragment::Empty),
            Some(Operand::Field(name)) => Fragment::text(name),
            Some(Operand::Nested(expr)) => self.constraint_at(expr, depth + 1)?,
        };
        Ok(Fragment::inline(Some(class::CONSTRAINT_SIDE), vec![inner]))
    }
}
