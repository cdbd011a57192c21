//! Tests for platform-agnostic types

use std::ffi::c_void;

use gll_core::types::{ProcAddress, Symbol, SymbolSet};

#[test]
fn test_proc_address_default_is_null()
{
    assert!(ProcAddress::default().is_null());
    assert_eq!(ProcAddress::default(), ProcAddress::NULL);
}

#[test]
fn test_proc_address_from_raw_pointers()
{
    let raw = 0x7f00_1000usize as *mut c_void;
    let from_mut = ProcAddress::from(raw);
    let from_const = ProcAddress::from(raw.cast_const());

    assert_eq!(from_mut, from_const);
    assert_eq!(from_mut.as_ptr() as usize, 0x7f00_1000);
}

#[test]
fn test_wgl_sentinels_become_null()
{
    for sentinel in [1usize, 2, 3, usize::MAX] {
        assert!(ProcAddress::from_wgl(sentinel as *const c_void).is_null(), "{sentinel:#x}");
    }
    assert!(ProcAddress::from_wgl(std::ptr::null()).is_null());
    assert!(!ProcAddress::from_wgl(4 as *const c_void).is_null());
}

#[test]
fn test_or_else_only_runs_when_null()
{
    let resolved = ProcAddress::new(0x1000 as *const c_void);
    let fallback = ProcAddress::new(0x2000 as *const c_void);

    assert_eq!(resolved.or_else(|| panic!("fallback evaluated")), resolved);
    assert_eq!(ProcAddress::NULL.or_else(|| fallback), fallback);
}

#[test]
fn test_cast_null_is_none()
{
    let cast: Option<extern "C" fn()> = unsafe { ProcAddress::NULL.cast() };
    assert!(cast.is_none());
}

#[test]
fn test_proc_address_display()
{
    let address = ProcAddress::new(0xdead_beef as *const c_void);
    assert_eq!(address.to_string(), "0x00000000deadbeef");
}

#[test]
fn test_symbol_vendor_suffix()
{
    assert_eq!(Symbol::new("glDebugMessageInsertARB").vendor_suffix(), Some("ARB"));
    assert_eq!(Symbol::new("glFinishFenceNV").vendor_suffix(), Some("NV"));
    assert_eq!(Symbol::new("glBlendFuncSeparateINTEL").vendor_suffix(), Some("INTEL"));
    assert!(!Symbol::new("glClear").is_vendor());
}

#[test]
fn test_symbol_pointer_type()
{
    assert_eq!(Symbol::new("glClear").pointer_type(), "PFNGLCLEARPROC");
    assert_eq!(Symbol::new("glDebugMessageInsertARB").pointer_type(), "PFNGLDEBUGMESSAGEINSERTARBPROC");
}

#[test]
fn test_symbol_set_orders_and_dedups()
{
    let mut set = SymbolSet::new();
    assert!(set.insert(Symbol::from("glViewport")));
    assert!(set.insert(Symbol::from("glClear")));
    assert!(!set.insert(Symbol::from("glViewport")));

    assert_eq!(set.len(), 2);
    assert_eq!(set.names(), ["glClear", "glViewport"]);
    assert!(set.contains("glClear"));
    assert!(!set.contains("glFlush"));
}

#[test]
fn test_symbol_borrows_as_its_name()
{
    use std::collections::BTreeSet;

    let set: BTreeSet<Symbol> = ["glViewport", "glClear", "glFlush"].into_iter().map(Symbol::from).collect();
    assert_eq!(set.get("glFlush").map(Symbol::name), Some("glFlush"));
    assert!(set.get("glFinish").is_none());
    assert_eq!(set.range::<str, _>((std::ops::Bound::Included("glD"), std::ops::Bound::Unbounded)).next().map(Symbol::name), Some("glFlush"));
}

#[test]
fn test_symbol_set_subset()
{
    let core: SymbolSet = ["glClear"].into_iter().map(Symbol::from).collect();
    let all: SymbolSet = ["glClear", "glFooEXT"].into_iter().map(Symbol::from).collect();

    assert!(core.is_subset(&all));
    assert!(!all.is_subset(&core));
    assert!(SymbolSet::new().is_subset(&core));
}
