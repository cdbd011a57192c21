// Generated by gll from mini_glcorearb.h (core and extension entry points). Do not edit.
//
// Slot storage and bulk resolution for 6 entry points. Paths into gll_core
// are absolute so this file can be included into any module.

/// Number of entry points in [`GllProcs`].
pub const GLL_PROC_COUNT: usize = 6;

/// Entry-point names, in slot order.
pub const GLL_PROC_NAMES: [&str; GLL_PROC_COUNT] = [
    "glClear",
    "glClearColor",
    "glDebugMessageInsertARB",
    "glFinishFenceNV",
    "glGetString",
    "glViewport",
];

/// One slot per entry point, null until loaded.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct GllProcs
{
    glClear:                                         ::gll_core::types::ProcAddress,
    glClearColor:                                    ::gll_core::types::ProcAddress,
    glDebugMessageInsertARB:                         ::gll_core::types::ProcAddress,
    glFinishFenceNV:                                 ::gll_core::types::ProcAddress,
    glGetString:                                     ::gll_core::types::ProcAddress,
    glViewport:                                      ::gll_core::types::ProcAddress,
}

impl ::gll_core::loader::ProcTable for GllProcs
{
    fn load_with(&mut self, loader: &mut dyn FnMut(&str) -> ::gll_core::types::ProcAddress)
    {
        self.glClear = loader("glClear");
        self.glClearColor = loader("glClearColor");
        self.glDebugMessageInsertARB = loader("glDebugMessageInsertARB");
        self.glFinishFenceNV = loader("glFinishFenceNV");
        self.glGetString = loader("glGetString");
        self.glViewport = loader("glViewport");
    }

    fn for_each_slot(&self, visit: &mut dyn FnMut(&str, ::gll_core::types::ProcAddress))
    {
        visit("glClear", self.glClear);
        visit("glClearColor", self.glClearColor);
        visit("glDebugMessageInsertARB", self.glDebugMessageInsertARB);
        visit("glFinishFenceNV", self.glFinishFenceNV);
        visit("glGetString", self.glGetString);
        visit("glViewport", self.glViewport);
    }
}
