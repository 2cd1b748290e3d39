#[macro_export]
macro_rules! push_heapless {
    ($heapless_vec: expr,$push_item: expr) => {
        $heapless_vec
            .push($push_item)
            .map_err(|_| $crate::error::Error::HeaplessPush($heapless_vec.capacity()))
    };
}
