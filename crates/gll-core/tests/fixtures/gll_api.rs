// Generated by gll from mini_glcorearb.h (core and extension entry points). Do not edit.
//
// Typed accessors for 6 entry points. `PFN*PROC` types must be in scope.

#[allow(non_snake_case, clippy::missing_safety_doc)]
impl GllProcs
{
    /// `glClear`, or `None` when the entry point is unavailable.
    #[inline]
    pub fn glClear(&self) -> Option<PFNGLCLEARPROC>
    {
        // SAFETY: the slot only ever holds the address resolved for `glClear`.
        unsafe { self.glClear.cast::<PFNGLCLEARPROC>() }
    }

    /// `glClearColor`, or `None` when the entry point is unavailable.
    #[inline]
    pub fn glClearColor(&self) -> Option<PFNGLCLEARCOLORPROC>
    {
        // SAFETY: the slot only ever holds the address resolved for `glClearColor`.
        unsafe { self.glClearColor.cast::<PFNGLCLEARCOLORPROC>() }
    }

    /// `glDebugMessageInsertARB`, or `None` when the entry point is unavailable.
    #[inline]
    pub fn glDebugMessageInsertARB(&self) -> Option<PFNGLDEBUGMESSAGEINSERTARBPROC>
    {
        // SAFETY: the slot only ever holds the address resolved for `glDebugMessageInsertARB`.
        unsafe { self.glDebugMessageInsertARB.cast::<PFNGLDEBUGMESSAGEINSERTARBPROC>() }
    }

    /// `glFinishFenceNV`, or `None` when the entry point is unavailable.
    #[inline]
    pub fn glFinishFenceNV(&self) -> Option<PFNGLFINISHFENCENVPROC>
    {
        // SAFETY: the slot only ever holds the address resolved for `glFinishFenceNV`.
        unsafe { self.glFinishFenceNV.cast::<PFNGLFINISHFENCENVPROC>() }
    }

    /// `glGetString`, or `None` when the entry point is unavailable.
    #[inline]
    pub fn glGetString(&self) -> Option<PFNGLGETSTRINGPROC>
    {
        // SAFETY: the slot only ever holds the address resolved for `glGetString`.
        unsafe { self.glGetString.cast::<PFNGLGETSTRINGPROC>() }
    }

    /// `glViewport`, or `None` when the entry point is unavailable.
    #[inline]
    pub fn glViewport(&self) -> Option<PFNGLVIEWPORTPROC>
    {
        // SAFETY: the slot only ever holds the address resolved for `glViewport`.
        unsafe { self.glViewport.cast::<PFNGLVIEWPORTPROC>() }
    }
}
