use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// A [`NodeId`](super::NodeId) was used with a tree that doesn't own it, or the node it referred
/// to has since been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignNode;

impl Display for ForeignNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Node doesn't belong to this tree!")
    }
}

impl Error for ForeignNode {}

/// The slot requested for a new leaf already holds a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOccupied;

impl Display for SlotOccupied {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to insert a leaf into an occupied slot!")
    }
}

impl Error for SlotOccupied {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum InsertLeafError {
    ForeignNode(ForeignNode),
    SlotOccupied(SlotOccupied),
}
