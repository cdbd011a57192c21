//! Entry-point address type.

use std::ffi::c_void;
use std::fmt;
use std::mem;

/// Opaque address of a resolved API entry point
///
/// This wrapper around a raw pointer is the value stored in every slot. It is
/// either null (unresolved) or the address of a callable function in a
/// library that is still open.
///
/// ## Why a newtype?
///
/// - **Type safety**: slots can't be confused with arbitrary data pointers
/// - **One null check**: WGL sentinel values are folded into null on the way in
/// - **Typed access**: [`ProcAddress::cast`] turns a slot into the function
///   pointer type the caller expects
///
/// The raw pointer makes this type `!Send` and `!Sync`, so a slot table can't
/// leave the thread that initialised it without the caller saying so.
///
/// ## Example
///
/// ```rust
/// use gll_core::types::ProcAddress;
///
/// let unresolved = ProcAddress::NULL;
/// assert!(unresolved.is_null());
/// assert_eq!(ProcAddress::default(), unresolved);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcAddress(*const c_void);

impl ProcAddress
{
    /// The unresolved address
    pub const NULL: Self = ProcAddress(std::ptr::null());

    /// Wrap a raw address returned by the dynamic loader
    pub const fn new(ptr: *const c_void) -> Self
    {
        ProcAddress(ptr)
    }

    /// Wrap an address returned by `wglGetProcAddress`
    ///
    /// Some WGL implementations return `1`, `2`, `3` or `-1` instead of null
    /// for unknown names. Those values are never callable, so they map to
    /// [`ProcAddress::NULL`].
    ///
    /// ```rust
    /// use gll_core::types::ProcAddress;
    ///
    /// assert!(ProcAddress::from_wgl(3 as *const _).is_null());
    /// assert!(ProcAddress::from_wgl(usize::MAX as *const _).is_null());
    /// assert!(!ProcAddress::from_wgl(0x1000 as *const _).is_null());
    /// ```
    pub fn from_wgl(ptr: *const c_void) -> Self
    {
        match ptr as usize {
            1 | 2 | 3 | usize::MAX => Self::NULL,
            _ => ProcAddress(ptr),
        }
    }

    /// Whether the slot is unresolved
    pub fn is_null(self) -> bool
    {
        self.0.is_null()
    }

    /// Raw pointer value
    pub const fn as_ptr(self) -> *const c_void
    {
        self.0
    }

    /// Use `self` if resolved, otherwise evaluate `fallback`
    ///
    /// This is the building block of every fallback chain in the platform
    /// strategies.
    #[must_use]
    pub fn or_else(self, fallback: impl FnOnce() -> Self) -> Self
    {
        if self.is_null() {
            fallback()
        } else {
            self
        }
    }

    /// Reinterpret the address as a function pointer of type `F`
    ///
    /// Returns `None` when the slot is unresolved.
    ///
    /// ## Safety
    ///
    /// `F` must be a function pointer type whose signature and calling
    /// convention match the entry point, and the library that provided the
    /// address must still be open when the result is called.
    pub unsafe fn cast<F: Copy>(self) -> Option<F>
    {
        debug_assert_eq!(mem::size_of::<F>(), mem::size_of::<*const c_void>());
        if self.is_null() {
            None
        } else {
            Some(mem::transmute_copy::<*const c_void, F>(&self.0))
        }
    }
}

impl Default for ProcAddress
{
    fn default() -> Self
    {
        Self::NULL
    }
}

impl From<*const c_void> for ProcAddress
{
    fn from(ptr: *const c_void) -> Self
    {
        ProcAddress(ptr)
    }
}

impl From<*mut c_void> for ProcAddress
{
    fn from(ptr: *mut c_void) -> Self
    {
        ProcAddress(ptr.cast_const())
    }
}

impl fmt::Display for ProcAddress
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:016x}", self.0 as usize)
    }
}
