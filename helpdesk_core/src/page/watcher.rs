use tokio::sync::watch;

/// Host-side handle announcing whether an element is on the page.
pub type PresenceSender<T> = watch::Sender<Option<T>>;
pub type PresenceReceiver<T> = watch::Receiver<Option<T>>;

pub fn presence_channel<T>() -> (PresenceSender<T>, PresenceReceiver<T>) {
    watch::channel(None)
}

/// Resolves with the element once it is present (immediately if it already is).
/// `None` means the host stopped reporting, so there is nothing left to wait for.
pub async fn wait_for_element<T: Clone>(rx: &mut PresenceReceiver<T>) -> Option<T> {
    match rx.wait_for(Option::is_some).await {
        Ok(value) => (*value).clone(),
        Err(_) => None,
    }
}

/// Resolves once the element is gone. `false` if the host stopped reporting
/// while the element was still present.
pub async fn wait_for_removal<T>(rx: &mut PresenceReceiver<T>) -> bool {
    rx.wait_for(Option::is_none).await.is_ok()
}
