// NOTE: Each node is exclusively owned by the link before it, with the list's head link standing in
// for the sentinel's. Dropping a link therefore drops the rest of the chain recursively, which is
// why LinkedList unlinks nodes one at a time on drop instead.

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { value, next })
    }
}
