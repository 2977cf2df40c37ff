//! Stack layout synthesis
//!
//! This module turns extracted declarations into address-annotated cells:
//! - [`StackLayout`]: ordered cells plus the base address they grew from
//! - [`StackCell`]: one declared variable in its slot
//!
//! # Pointer Targets
//!
//! A pointer is assumed to point at whatever was declared immediately before
//! it. That holds for the canonical `int x = ...; int *ptr = &x;` snippet and
//! is simply wrong for anything fancier; the model is illustrative.
//!
//! A pointer declared first targets the slot *below* the base address. The
//! address is still computed (`base - 8`), but no cell lives there, so
//! [`StackLayout::target_of`] returns `None` for it.

use super::{format_address, sizeof_declared, SLOT_SIZE, STACK_BASE_ADDRESS};
use crate::parser::ast::Declaration;
use rustc_hash::FxHashMap;

/// One declared variable in its synthetic stack slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackCell {
    pub address: u64,
    pub name: String,
    pub declared_type: String,
    pub is_pointer: bool,
    /// Initializer text for values, `→ 0x...` for pointers
    pub display_value: String,
    /// Raw initializer text, shown in the details view for pointers too
    pub initializer_text: String,
    pub points_to_address: Option<u64>,
    pub size_bytes: usize,
}

impl StackCell {
    /// Type as written in the visualizer, e.g. `int*`
    pub fn type_annotation(&self) -> String {
        if self.is_pointer {
            format!("{}*", self.declared_type)
        } else {
            self.declared_type.clone()
        }
    }
}

/// Ordered stack cells, lowest address first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackLayout {
    base_address: u64,
    cells: Vec<StackCell>,
    by_address: FxHashMap<u64, usize>,
}

impl StackLayout {
    /// Assign slots to `declarations` in order, starting at
    /// [`STACK_BASE_ADDRESS`]. Pure: the same input always yields the same
    /// layout, and an empty input yields an empty layout.
    pub fn build(declarations: &[Declaration]) -> Self {
        Self::build_at(STACK_BASE_ADDRESS, declarations)
    }

    /// [`StackLayout::build`] with an explicit base address. Slot addresses
    /// wrap around the top of the address space instead of overflowing.
    pub fn build_at(base_address: u64, declarations: &[Declaration]) -> Self {
        let mut cells = Vec::with_capacity(declarations.len());
        let mut by_address = FxHashMap::default();

        for (index, decl) in declarations.iter().enumerate() {
            let address = base_address.wrapping_add(SLOT_SIZE.wrapping_mul(index as u64));

            let (points_to_address, display_value) = if decl.is_pointer {
                // index 0 wraps below the base; see module docs
                let target = address.wrapping_sub(SLOT_SIZE);
                (Some(target), format!("→ {}", format_address(target)))
            } else {
                (None, decl.initializer_text.clone())
            };

            by_address.insert(address, index);
            cells.push(StackCell {
                address,
                name: decl.name.clone(),
                declared_type: decl.declared_type.clone(),
                is_pointer: decl.is_pointer,
                display_value,
                initializer_text: decl.initializer_text.clone(),
                points_to_address,
                size_bytes: sizeof_declared(&decl.declared_type, decl.is_pointer),
            });
        }

        tracing::debug!(cells = cells.len(), base = %format_address(base_address), "built stack layout");

        StackLayout {
            base_address,
            cells,
            by_address,
        }
    }

    pub fn base_address(&self) -> u64 {
        self.base_address
    }

    /// Cells in declaration order (ascending addresses)
    pub fn cells(&self) -> &[StackCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Look up the cell occupying `address`, if any
    pub fn cell_at(&self, address: u64) -> Option<&StackCell> {
        self.by_address.get(&address).map(|&i| &self.cells[i])
    }

    /// The cell a pointer cell points at. `None` for value cells and for the
    /// unassigned slot below the base.
    pub fn target_of(&self, cell: &StackCell) -> Option<&StackCell> {
        cell.points_to_address
            .and_then(|address| self.cell_at(address))
    }
}

impl Default for StackLayout {
    fn default() -> Self {
        Self::build(&[])
    }
}
