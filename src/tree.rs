use crate::key::Key;

pub trait TreeOps {
    fn insert(&mut self, key: Key);
    fn contains(&self, key: &Key) -> bool;
    fn len(&self) -> usize;
    fn height(&self) -> i32;
}
