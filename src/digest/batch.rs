//! Hashing many independent inputs at once.
//!
//! Every digest owns its own state, so inputs can be spread across threads freely. With
//! the `parallel` feature the work runs on rayon's global pool; without it the batch is
//! processed in order on the calling thread. Output order always matches input order.

use super::md5::{md5_digest, RawDigest};

/// Computes the MD5 digest of every input.
///
/// # Examples
///
/// ```
/// use legacy_md5::digest::{digest_batch, md5_digest};
///
/// let inputs = ["hello", "world"];
/// let digests = digest_batch(&inputs);
/// assert_eq!(digests[1], md5_digest(b"world"));
/// ```
pub fn digest_batch<T>(inputs: &[T]) -> Vec<RawDigest>
where
    T: AsRef<[u8]> + Sync,
{
    log::debug!("md5 batch: {} inputs", inputs.len());
    hash_all(inputs)
}

#[cfg(feature = "parallel")]
fn hash_all<T>(inputs: &[T]) -> Vec<RawDigest>
where
    T: AsRef<[u8]> + Sync,
{
    use rayon::prelude::*;
    inputs
        .par_iter()
        .map(|input| md5_digest(input.as_ref()))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn hash_all<T>(inputs: &[T]) -> Vec<RawDigest>
where
    T: AsRef<[u8]>,
{
    inputs
        .iter()
        .map(|input| md5_digest(input.as_ref()))
        .collect()
}
