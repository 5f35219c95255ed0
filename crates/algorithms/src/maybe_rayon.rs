//! Optional rayon execution.
//!
//! With the `parallel` feature the work is spread over rayon's pool;
//! without it the same calls run sequentially. Either way results come back
//! in input order.

use bathy_core::Result;

/// Apply a fallible `f` to every item, stopping at the first error.
pub(crate) fn try_map<T, U, F>(items: Vec<T>, f: F) -> Result<Vec<U>>
where
    T: Send,
    U: Send,
    F: Fn(T) -> Result<U> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items.into_par_iter().map(f).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items.into_iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bathy_core::Error;

    #[test]
    fn test_preserves_order() {
        let out = try_map((0..1000).collect(), |i: u32| Ok(i * 2)).unwrap();
        assert_eq!(out, (0..1000).map(|i| i * 2).collect::<Vec<u32>>());
    }

    #[test]
    fn test_propagates_error() {
        let result = try_map(vec![1, 2, 3], |i: u32| {
            if i == 2 {
                Err(Error::InvalidArgument(format!("item {}", i)))
            } else {
                Ok(i)
            }
        });
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
