/*!
Text renderings of imported routes.

PSV output lives on [crate::RouteRecord] itself; this module holds table renderers.
*/
pub mod cisco;
