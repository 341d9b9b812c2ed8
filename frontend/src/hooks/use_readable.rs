use yew::prelude::*;

use crate::stores::Readable;

/// Current value of a store; the component re-renders whenever it changes
#[hook]
pub fn use_readable<T>(readable: &Readable<T>) -> T
where
    T: Clone + PartialEq + 'static,
{
    let value = use_state_eq(|| readable.get());

    {
        let value = value.clone();
        use_effect_with(readable.clone(), move |readable| {
            let subscription = readable.subscribe(move |next: &T| value.set(next.clone()));
            move || drop(subscription)
        });
    }

    (*value).clone()
}
